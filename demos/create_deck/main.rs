mod commands;

use command_source::{CommandSource, DispatchError, LocalTransport, Reply};
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::{CreateDeck, CreateDeckCommand, CreateDeckPayload, CreateDeckResponse, CREATE_DECK};

#[tokio::main]
async fn main() -> Result<(), DispatchError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut source: CommandSource<CreateDeckCommand, CreateDeckResponse> =
        CommandSource::new("Modal", LocalTransport::new());

    source.register_handler(|cmd| {
        Reply::deferred(async move {
            info!(source = %cmd.source, deck = %cmd.payload.name, "[LOCAL HANDLER] creating deck");
            CreateDeckResponse { new_deck_id: 777 }
        })
    });

    let result = source
        .trigger(CreateDeck {
            kind: CREATE_DECK,
            payload: CreateDeckPayload {
                name: "Physics".to_string(),
            },
        })?
        .await;

    info!(deck_id = result.new_deck_id, "Local created deck");
    Ok(())
}
