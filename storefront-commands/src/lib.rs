pub mod controller;
pub mod render;

use tracing::debug;

use storefront_core::Context;
use storefront_utils::COMMAND_PREFIX;
use storefront_utils::pagination::parse_one_based_page;
use storefront_utils::parse::{parse_one_based_index, split_command};

use controller::{FilterController, QueryOutcome};
use render::{render_control_ids, render_page, render_suggestions};

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    CommandMeta {
        name: "page",
        desc: "Jump to a page of the current results.",
        usage: "!page <n>",
    },
    CommandMeta {
        name: "click",
        desc: "Press a pagination control by its id.",
        usage: "!click <control-id>",
    },
    CommandMeta {
        name: "controls",
        desc: "List the ids of the current pagination controls.",
        usage: "!controls",
    },
    CommandMeta {
        name: "suggest",
        desc: "Show suggestions for the last typed text.",
        usage: "!suggest",
    },
    CommandMeta {
        name: "pick",
        desc: "Filter by a suggestion from the last list.",
        usage: "!pick <n>",
    },
    CommandMeta {
        name: "clear",
        desc: "Clear the search box.",
        usage: "!clear",
    },
    CommandMeta {
        name: "help",
        desc: "Lists out all available commands.",
        usage: "!help",
    },
    CommandMeta {
        name: "quit",
        desc: "Leave the storefront.",
        usage: "!quit",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InputRoute {
    Page,
    Click,
    Controls,
    Suggest,
    Pick,
    Clear,
    Help,
    Quit,
}

fn route_command(command: &str) -> Option<InputRoute> {
    const ROUTES: [(&str, InputRoute); 8] = [
        ("page", InputRoute::Page),
        ("click", InputRoute::Click),
        ("controls", InputRoute::Controls),
        ("suggest", InputRoute::Suggest),
        ("pick", InputRoute::Pick),
        ("clear", InputRoute::Clear),
        ("help", InputRoute::Help),
        ("quit", InputRoute::Quit),
    ];

    ROUTES
        .into_iter()
        .find_map(|(name, route)| (name == command).then_some(route))
}

/// What the caller should do after an input line was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Print the text.
    Reply(String),
    /// Typed search text: print the live suggestions (if any) and feed
    /// `text` through the debouncer before calling [`apply_query`].
    Query {
        text: String,
        suggestions: Option<String>,
    },
    Quit,
}

/// Per-user input state: the controller plus the text last typed.
#[derive(Debug, Clone)]
pub struct Session {
    controller: FilterController,
    last_input: String,
}

impl Session {
    pub fn new(controller: FilterController) -> Self {
        Self {
            controller,
            last_input: String::new(),
        }
    }

    pub fn from_context(ctx: &Context) -> Self {
        Self::new(FilterController::from_context(ctx))
    }

    pub fn controller(&self) -> &FilterController {
        &self.controller
    }

    pub fn last_input(&self) -> &str {
        &self.last_input
    }
}

/// Handle one raw input line.
pub fn handle_line(session: &mut Session, line: &str) -> Dispatch {
    let Some((command, arg)) = split_command(line, COMMAND_PREFIX) else {
        let text = line.trim().to_owned();
        session.last_input.clone_from(&text);
        let suggestions = render_suggestions(&session.controller.suggestions(&text));
        return Dispatch::Query { text, suggestions };
    };

    let Some(route) = route_command(&command) else {
        return Dispatch::Reply(format!("Unknown command `{command}`. Try `!help`."));
    };

    match route {
        InputRoute::Page => change_page(session, arg),
        InputRoute::Click => click_control(session, arg),
        InputRoute::Controls => Dispatch::Reply(render_control_ids(&session.controller)),
        InputRoute::Suggest => {
            let suggestions = session.controller.suggestions(&session.last_input);
            Dispatch::Reply(
                render_suggestions(&suggestions).unwrap_or_else(|| "No suggestions.".to_owned()),
            )
        }
        InputRoute::Pick => pick_suggestion(session, arg),
        InputRoute::Clear => {
            session.last_input.clear();
            session.controller.on_query_change("");
            Dispatch::Reply(render_page(&session.controller))
        }
        InputRoute::Help => Dispatch::Reply(help_text()),
        InputRoute::Quit => Dispatch::Quit,
    }
}

/// Apply a debounced query, unless newer input has superseded it.
///
/// Returns the rendered page when the query changed the result set.
pub fn apply_query(session: &mut Session, text: &str) -> Option<String> {
    if text != session.last_input {
        debug!(stale = text, latest = %session.last_input, "debounced query superseded");
        return None;
    }

    match session.controller.on_query_change(text) {
        QueryOutcome::Unchanged => None,
        QueryOutcome::Applied { .. } => Some(render_page(&session.controller)),
    }
}

fn change_page(session: &mut Session, arg: Option<&str>) -> Dispatch {
    let total = session.controller.total_pages();
    let Some(page) = arg.and_then(|raw| parse_one_based_page(Some(raw))) else {
        return Dispatch::Reply("Usage: `!page <n>` (page starts at 1)".to_owned());
    };

    if session.controller.on_page_change(page) {
        Dispatch::Reply(render_page(&session.controller))
    } else {
        Dispatch::Reply(format!(
            "Page {page} does not exist. Available pages: 1-{total}."
        ))
    }
}

fn click_control(session: &mut Session, arg: Option<&str>) -> Dispatch {
    let Some(control_id) = arg else {
        return Dispatch::Reply("Usage: `!click <control-id>`".to_owned());
    };

    match session.controller.dispatch_control(control_id) {
        Ok(_) => Dispatch::Reply(render_page(&session.controller)),
        Err(error) => Dispatch::Reply(format!("Cannot use that control: {error}.")),
    }
}

fn pick_suggestion(session: &mut Session, arg: Option<&str>) -> Dispatch {
    let Some(index) = arg.and_then(parse_one_based_index) else {
        return Dispatch::Reply("Usage: `!pick <n>`".to_owned());
    };

    let picked = session
        .controller
        .suggestions(&session.last_input)
        .get(index)
        .map(|product| (*product).clone());

    let Some(product) = picked else {
        return Dispatch::Reply(format!("There is no suggestion #{}.", index + 1));
    };

    session.last_input.clone_from(&product.name);
    session.controller.on_suggestion_pick(&product);
    Dispatch::Reply(render_page(&session.controller))
}

fn help_text() -> String {
    let mut lines = vec!["Type to search. Commands:".to_owned()];
    lines.extend(
        COMMANDS
            .iter()
            .map(|command| format!("  {:<22} {}", command.usage, command.desc)),
    );
    lines.join("\n")
}
