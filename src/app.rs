//! Application state
//!
//! Composition root tying the chat session, the symptom checker flow, and
//! the capability report together under one active view.

use crate::capabilities::Capabilities;
use crate::chat::ChatSession;
use crate::checker::CheckerFlow;
use crate::config::Config;
use std::fmt;
use std::str::FromStr;

/// The feature currently in the foreground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Chat,
    Symptoms,
    Diseases,
    Finder,
    Tips,
}

impl ActiveView {
    pub fn all() -> &'static [ActiveView] {
        &[
            ActiveView::Chat,
            ActiveView::Symptoms,
            ActiveView::Diseases,
            ActiveView::Finder,
            ActiveView::Tips,
        ]
    }
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActiveView::Chat => "chat",
            ActiveView::Symptoms => "symptoms",
            ActiveView::Diseases => "diseases",
            ActiveView::Finder => "finder",
            ActiveView::Tips => "tips",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ActiveView {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chat" => Ok(ActiveView::Chat),
            "symptoms" | "checker" => Ok(ActiveView::Symptoms),
            "diseases" => Ok(ActiveView::Diseases),
            "finder" | "facilities" => Ok(ActiveView::Finder),
            "tips" => Ok(ActiveView::Tips),
            other => Err(format!("Unknown view: {}", other)),
        }
    }
}

/// Top-level session state
pub struct AppState {
    pub config: Config,
    pub capabilities: Capabilities,
    pub view: ActiveView,
    pub dark_theme: bool,
    pub speak_replies: bool,
    pub chat: ChatSession,
    pub checker: CheckerFlow,
}

impl AppState {
    /// Build the session from loaded config and the startup probe
    pub fn new(config: Config, capabilities: Capabilities) -> Self {
        let dark_theme = config.ui.dark_theme;
        // Speaking requires both the preference and a working synthesizer
        let speak_replies =
            config.ui.speak_replies && capabilities.speech_output.is_available();

        AppState {
            config,
            capabilities,
            view: ActiveView::Chat,
            dark_theme,
            speak_replies,
            chat: ChatSession::new(),
            checker: CheckerFlow::default(),
        }
    }

    /// Switch the foreground view; switching is always allowed and leaves
    /// every feature's state intact
    pub fn switch_view(&mut self, view: ActiveView) {
        self.view = view;
    }

    pub fn toggle_theme(&mut self) -> bool {
        self.dark_theme = !self.dark_theme;
        self.dark_theme
    }

    /// Toggle spoken replies; stays off when no synthesizer exists
    pub fn toggle_speech(&mut self) -> bool {
        if self.capabilities.speech_output.is_available() {
            self.speak_replies = !self.speak_replies;
        }
        self.speak_replies
    }
}
