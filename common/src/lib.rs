pub mod demo_analysis;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerConnection {
    pub user_id: i32,
    pub guid: String,
    pub bot: bool,
}
