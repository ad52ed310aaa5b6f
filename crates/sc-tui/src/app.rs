//! Top-level application state managing tabs and the viewer session.

use sc_assets::{AssetResolver, AssetWarning};
use sc_quiz::{Action, Outcome, ViewerSession};
use sc_view::View;

use crate::tabs::banner::BannerTab;
use crate::tabs::episodes::EpisodesTab;
use crate::tabs::graph::GraphTab;
use crate::tabs::quiz::QuizTab;
use crate::tabs::{Tab, TabId};

/// Main application state for the TUI.
pub struct TuiApp {
    /// Selection and quiz progress.
    pub session: ViewerSession,
    /// The view for the current state, rebuilt after every action.
    pub view: View,
    /// Currently active tab.
    pub active_tab: TabId,
    /// Whether to show the global help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Last error, shown in the status bar until the next action.
    pub status: Option<String>,

    resolver: AssetResolver,

    /// Banner tab.
    pub banner: BannerTab,
    /// Graph tab.
    pub graph: GraphTab,
    /// Episodes tab.
    pub episodes: EpisodesTab,
    /// Quiz tab.
    pub quiz: QuizTab,
}

impl TuiApp {
    /// Create the app for a session, starting on `start_tab`.
    pub fn new(session: ViewerSession, resolver: AssetResolver, start_tab: TabId) -> Self {
        let view = sc_view::render(session.catalog(), session.selection(), session.quiz());
        let mut app = Self {
            session,
            view,
            active_tab: start_tab,
            show_help: false,
            should_quit: false,
            status: None,
            resolver,
            banner: BannerTab::new(),
            graph: GraphTab::new(),
            episodes: EpisodesTab::new(),
            quiz: QuizTab::new(),
        };
        app.load_images();
        app
    }

    /// Get a reference to the active tab.
    pub fn active_tab_ref(&self) -> &dyn Tab {
        match self.active_tab {
            TabId::Banner => &self.banner,
            TabId::Graph => &self.graph,
            TabId::Episodes => &self.episodes,
            TabId::Quiz => &self.quiz,
        }
    }

    /// Get a mutable reference to the active tab.
    pub fn active_tab_mut(&mut self) -> &mut dyn Tab {
        match self.active_tab {
            TabId::Banner => &mut self.banner,
            TabId::Graph => &mut self.graph,
            TabId::Episodes => &mut self.episodes,
            TabId::Quiz => &mut self.quiz,
        }
    }

    /// Switch to a tab by ID.
    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    /// Forward a key to the active tab and apply whatever it asks for.
    pub fn forward_key(&mut self, key: crossterm::event::KeyEvent) {
        let view = &self.view;
        let action = match self.active_tab {
            TabId::Banner => self.banner.handle_key(key, view),
            TabId::Graph => self.graph.handle_key(key, view),
            TabId::Episodes => self.episodes.handle_key(key, view),
            TabId::Quiz => self.quiz.handle_key(key, view),
        };
        if let Some(action) = action {
            self.apply(action);
        }
    }

    /// Move `step` shows along the catalog, wrapping around.
    pub fn cycle_show(&mut self, step: isize) {
        let Some(title) = self.session.neighbour(step).map(str::to_string) else {
            return;
        };
        self.apply(Action::SelectShow(title));
    }

    /// Dispatch an action and rebuild the view.
    pub fn apply(&mut self, action: Action) {
        self.status = None;
        match self.session.dispatch(action) {
            Ok(Outcome::Selected(title)) => {
                tracing::info!(%title, "show selected");
                self.banner.reset();
                self.graph.reset();
                self.episodes.reset();
                self.quiz.reset();
                self.load_images();
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "action rejected");
                self.status = Some(e.to_string());
            }
        }
        self.view = sc_view::render(
            self.session.catalog(),
            self.session.selection(),
            self.session.quiz(),
        );
    }

    /// Resolve the current show's images so fallbacks can be reported.
    fn load_images(&mut self) {
        let warnings: Vec<AssetWarning> = match self.session.current_show() {
            Some(show) => self
                .resolver
                .resolve_show(show)
                .warnings()
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        self.banner.set_warnings(warnings);
    }
}
