use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SerializedPointSet {
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) markers: Vec<SerializedMarker>,
}

#[derive(Debug, Deserialize)]
pub struct SerializedMarker {
    pub(crate) lat: f64,
    pub(crate) lng: f64,
    #[serde(default)]
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) questions: Vec<SerializedQuestion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedQuestion {
    pub(crate) question: String,
    pub(crate) correct_answer: String,
    pub(crate) wrong_answers: Vec<String>,
}
