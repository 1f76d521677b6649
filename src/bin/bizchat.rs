//! Interactive terminal front end for the small-business assistant.
//!
//! # Usage
//!
//! ```bash
//! # Talk to a backend on http://localhost:5000/
//! bizchat --idea "coffee shop"
//!
//! # Point at another backend
//! bizchat --base-url http://10.0.0.5:5000
//!
//! # Disable colors (useful for piping output)
//! bizchat --no-color
//! ```
//!
//! Diagnostics go to stderr and are filtered by `RUST_LOG` (default `warn`).
//!
//! # Commands
//!
//! - `/idea [text]` - Set or show the business idea
//! - `/quick [n]` - List quick actions, or send one
//! - `/pick <n>` - Accept the n-th suggested name
//! - `/history` - Show the conversation again
//! - `/status` - Show session status
//! - `/health` - Probe the backend
//! - `/quit` - Exit the application

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing_subscriber::EnvFilter;

use bizchat::chat::{
    ChatArgs, ChatCommand, ChatConfig, ChatSession, PlainTextRenderer, QUICK_ACTIONS, Renderer,
    help_text, name_follow_up, parse_command, quick_action,
};
use bizchat::{Action, ChatClient, Message, render_message};

/// Main entry point for the bizchat application.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (args, _) = ChatArgs::from_command_line_relaxed("bizchat [OPTIONS]");
    let config = ChatConfig::from(args);

    let client = ChatClient::with_options(config.base_url.clone(), Some(config.timeout))?;
    tracing::info!(base_url = %client.base_url(), "starting bizchat");
    let mut session = ChatSession::new(client);
    session.set_business_context(config.business_idea.clone());
    let mut renderer = PlainTextRenderer::with_color(config.use_color);
    let mut rl = DefaultEditor::new()?;

    println!("Small Business Assistant ({})", session.transport().base_url());
    println!("Type /help for commands, /quit to exit\n");
    if session.conversation().business_context().is_empty() {
        renderer.print_info("Tip: describe your business with /idea <text>.\n");
    }
    if session.conversation().is_empty() {
        renderer.print_quick_actions(&QUICK_ACTIONS);
    }

    loop {
        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Idea(Some(idea)) => {
                            renderer.print_info(&format!("Business idea set to: {}", idea));
                            session.set_business_context(idea);
                        }
                        ChatCommand::Idea(None) => {
                            let idea = session.conversation().business_context();
                            if idea.is_empty() {
                                renderer.print_info("Business idea: (none)");
                            } else {
                                renderer.print_info(&format!("Business idea: {}", idea));
                            }
                        }
                        ChatCommand::Quick(None) => {
                            renderer.print_quick_actions(&QUICK_ACTIONS);
                        }
                        ChatCommand::Quick(Some(position)) => match quick_action(position) {
                            Some(action) => {
                                renderer.print_user(action.prompt);
                                renderer.print_pending();
                                let outcome = session.submit_quick_action(action).await;
                                show_outcome(&mut renderer, outcome);
                            }
                            None => renderer
                                .print_error(&format!("No quick action numbered {}", position)),
                        },
                        ChatCommand::Pick(position) => {
                            match session.latest_actions().get(position - 1).cloned() {
                                Some(action) => {
                                    let Action::SelectName(name) = &action;
                                    renderer.print_user(&name_follow_up(name));
                                    renderer.print_pending();
                                    let outcome = session.dispatch(&action).await;
                                    show_outcome(&mut renderer, outcome);
                                }
                                None => renderer.print_error(&format!(
                                    "The latest reply has no suggestion numbered {}",
                                    position
                                )),
                            }
                        }
                        ChatCommand::History => {
                            for message in session.conversation().history() {
                                print_message(&mut renderer, message);
                            }
                        }
                        ChatCommand::Status => {
                            print_status(&session);
                        }
                        ChatCommand::Health => match session.transport().health().await {
                            Ok(health) => renderer.print_info(&format!(
                                "Backend is {} (status: {}, at {})",
                                if health.is_healthy() {
                                    "up"
                                } else {
                                    "degraded"
                                },
                                health.status,
                                health.timestamp.as_deref().unwrap_or("unknown time"),
                            )),
                            Err(err) => {
                                renderer.print_error(&format!("Health check failed: {}", err))
                            }
                        },
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                session.set_draft(line);
                renderer.print_pending();
                let outcome = session.submit_draft().await;
                show_outcome(&mut renderer, outcome);
            }
            Err(ReadlineError::Interrupted) => {
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

fn show_outcome(renderer: &mut impl Renderer, outcome: bizchat::Result<Option<&Message>>) {
    match outcome {
        Ok(Some(reply)) => renderer.print_block(&render_message(reply)),
        Ok(None) => {
            renderer.print_info("Nothing to send. Type a message or set your idea with /idea.")
        }
        Err(err) => renderer.print_error(&err.to_string()),
    }
}

fn print_message(renderer: &mut impl Renderer, message: &Message) {
    if message.is_user() {
        renderer.print_user(message.text());
    } else {
        renderer.print_block(&render_message(message));
    }
}

fn print_status(session: &ChatSession) {
    let stats = session.stats();
    println!("    Session Status:");
    println!("      Backend: {}", session.transport().base_url());
    println!("      Messages: {}", stats.message_count);
    if stats.business_context.is_empty() {
        println!("      Business idea: (none)");
    } else {
        println!("      Business idea: {}", stats.business_context);
    }
    println!(
        "      Business name: {}",
        stats.business_name.as_deref().unwrap_or("(none)")
    );
    println!("      Phase: {:?}", stats.phase);
}
