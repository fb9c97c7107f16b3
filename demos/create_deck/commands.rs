use command_source::Command;

pub const CREATE_DECK: &str = "CreateDeck";

#[derive(Debug, Clone)]
pub struct CreateDeckPayload {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct CreateDeckResponse {
    pub new_deck_id: u64,
}

/// Asks the deck service to create an empty deck.
#[derive(Debug, Clone, Command)]
#[command(payload = "CreateDeck", derive(Debug, Clone))]
pub struct CreateDeckCommand {
    pub kind: &'static str,
    pub source: String,
    pub payload: CreateDeckPayload,
}
