//! ChatWarden Telegram Bot
//!
//! Main application entry point

#![allow(non_snake_case)]

use std::sync::Arc;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Update;
use tracing::{error, info, warn};

use ChatWarden::{
    config::Settings,
    handlers::{
        commands::{self, Command},
        messages,
    },
    models::CommandInvocation,
    platform::TelegramPlatform,
    services::{AdminRegistry, ServiceFactory},
    storage::{FileRulesProvider, JsonAdminStore},
    utils::logging,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard keeps the file writer alive
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting ChatWarden Telegram bot...");

    // Durable collaborators
    let admin_store = Arc::new(JsonAdminStore::new(&settings.storage.admins_file));
    let rules = Arc::new(FileRulesProvider::new(&settings.storage.rules_file));

    info!("Loading admin registry...");
    let registry = Arc::new(
        AdminRegistry::load(settings.bot.technical_admin_ids.clone(), admin_store).await?,
    );

    // Initialize bot and services
    let bot = Bot::new(&settings.bot.token);
    let platform = Arc::new(TelegramPlatform::new(bot.clone()));
    let services = Arc::new(ServiceFactory::new(registry, platform, rules));

    info!("Setting up bot handlers...");
    let handler = create_handler();

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![services])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("ChatWarden is ready, starting polling...");
    dispatcher.dispatch().await;

    info!("ChatWarden has been shut down.");
    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry().branch(
        Update::filter_message()
            .branch(
                // Handle commands
                dptree::entry()
                    .filter_command::<Command>()
                    .endpoint(handle_command_update),
            )
            .branch(
                // Handle new chat members
                dptree::filter(|msg: Message| msg.new_chat_members().is_some())
                    .endpoint(handle_new_members),
            ),
    )
}

/// Handle bot commands: build the invocation context, run the handler and
/// send the single reply back to the originating chat.
async fn handle_command_update(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: Arc<ServiceFactory>,
) -> HandlerResult {
    let invocation = match CommandInvocation::from_message(&msg) {
        Ok(invocation) => invocation,
        Err(err) => {
            warn!(error = %err, "Discarding malformed command message");
            return Ok(());
        }
    };

    let reply = commands::handle_command(cmd, &services, &invocation).await;
    bot.send_message(invocation.chat, reply.text).await?;
    Ok(())
}

/// Handle new chat members
async fn handle_new_members(bot: Bot, msg: Message, services: Arc<ServiceFactory>) -> HandlerResult {
    if let Err(e) = messages::handle_new_chat_member(bot, msg, &services).await {
        error!(error = %e, "Error handling new chat member");
        return Err(e.into());
    }
    Ok(())
}
