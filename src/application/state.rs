//! Selection screen state.
//!
//! The screen owns the two option lists, the two selected values and the
//! interaction state of the dropdowns. It never performs I/O itself: fetches
//! are queued as [`FetchRequest`]s for the event loop to run, and their
//! outcomes come back through [`App::apply`].

use crate::domain::{
    DirectoryResult, Navigator, RouteParams, SelectOption, POINTS_ROUTE, UNSELECTED,
};
use tracing::{debug, info, warn};

/// Placeholder entry of the state dropdown.
pub const REGION_PLACEHOLDER: &str = "Selecione uma UF";
/// Placeholder entry of the city dropdown.
pub const LOCALITY_PLACEHOLDER: &str = "Selecione uma cidade";

/// One of the two dropdowns on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Picker {
    /// State (UF) dropdown
    Region,
    /// City dropdown, scoped to the selected state
    Locality,
}

impl Picker {
    pub fn placeholder(self) -> &'static str {
        match self {
            Picker::Region => REGION_PLACEHOLDER,
            Picker::Locality => LOCALITY_PLACEHOLDER,
        }
    }
}

/// The control that currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Region,
    Locality,
    Submit,
}

/// Current mode of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Moving focus between the controls
    Browsing,
    /// A dropdown list is open
    Picking(Picker),
    /// The selection was handed to the navigator
    Done,
}

/// Progress of the last fetch behind one dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// Nothing requested yet
    Idle,
    /// Request in flight
    Loading,
    /// Last request succeeded
    Loaded,
    /// Last request failed, with a readable reason
    Failed(String),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }
}

/// A fetch the event loop must run on behalf of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Load every state
    States,
    /// Load the cities of `uf`, tagged with the ticket it was issued under
    Cities { ticket: u64, uf: String },
}

/// Outcome of a [`FetchRequest`].
#[derive(Debug)]
pub enum FetchEvent {
    States(DirectoryResult<Vec<SelectOption>>),
    Cities {
        ticket: u64,
        uf: String,
        result: DirectoryResult<Vec<SelectOption>>,
    },
}

/// State of the landing screen.
///
/// # Examples
///
/// ```
/// use ecoleta::application::{App, FetchRequest};
/// use ecoleta::domain::{Navigator, RouteParams};
///
/// struct Nowhere;
/// impl Navigator for Nowhere {
///     fn navigate(&mut self, _route: &str, _params: RouteParams) {}
/// }
///
/// let mut app = App::new(Box::new(Nowhere));
/// app.initialize();
/// assert_eq!(app.take_requests(), vec![FetchRequest::States]);
/// assert_eq!(app.selected_region, "0");
/// ```
pub struct App {
    /// Options of the state dropdown
    pub region_options: Vec<SelectOption>,
    /// Options of the city dropdown
    pub locality_options: Vec<SelectOption>,
    /// Chosen state, `"0"` while unset
    pub selected_region: String,
    /// Chosen city name, `"0"` while unset
    pub selected_locality: String,
    /// Progress of the state list
    pub region_status: FetchStatus,
    /// Progress of the city list
    pub locality_status: FetchStatus,
    /// Focused control
    pub focus: Focus,
    /// Current mode
    pub mode: AppMode,
    /// Highlighted row of the open dropdown; row 0 is the placeholder
    pub picker_index: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Set when the user leaves without submitting
    pub should_quit: bool,
    latest_ticket: u64,
    initialized: bool,
    requests: Vec<FetchRequest>,
    navigator: Box<dyn Navigator>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("selected_region", &self.selected_region)
            .field("selected_locality", &self.selected_locality)
            .field("region_status", &self.region_status)
            .field("locality_status", &self.locality_status)
            .field("focus", &self.focus)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Creates an unmounted screen that will hand its selection to `navigator`.
    pub fn new(navigator: Box<dyn Navigator>) -> Self {
        Self {
            region_options: Vec::new(),
            locality_options: Vec::new(),
            selected_region: UNSELECTED.to_string(),
            selected_locality: UNSELECTED.to_string(),
            region_status: FetchStatus::Idle,
            locality_status: FetchStatus::Idle,
            focus: Focus::Region,
            mode: AppMode::Browsing,
            picker_index: 0,
            status_message: None,
            should_quit: false,
            latest_ticket: 0,
            initialized: false,
            requests: Vec::new(),
            navigator,
        }
    }

    /// Mounts the screen: requests the state list once.
    ///
    /// Calling it again has no effect.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.request_states();
    }

    /// Hands over the fetches queued since the last call.
    pub fn take_requests(&mut self) -> Vec<FetchRequest> {
        std::mem::take(&mut self.requests)
    }

    /// Stores the chosen state and starts loading its cities.
    ///
    /// Choosing the same state again does nothing. Any other change resets the
    /// chosen city. Choosing the placeholder issues no request and leaves the
    /// city list untouched.
    pub fn select_region(&mut self, uf: &str) {
        if self.selected_region == uf {
            return;
        }
        debug!(from = %self.selected_region, to = %uf, "state changed");
        self.selected_region = uf.to_string();
        self.selected_locality = UNSELECTED.to_string();

        if uf == UNSELECTED {
            // Whatever is in flight or failed belongs to the previous state.
            if matches!(self.locality_status, FetchStatus::Loading | FetchStatus::Failed(_)) {
                self.locality_status = FetchStatus::Idle;
            }
            return;
        }
        self.request_cities();
    }

    /// Stores the chosen city name.
    pub fn select_locality(&mut self, city: &str) {
        self.selected_locality = city.to_string();
    }

    /// Forwards the current pair to the navigator, as is.
    pub fn submit(&mut self) {
        let params = RouteParams {
            uf: self.selected_region.clone(),
            city: self.selected_locality.clone(),
        };
        info!(uf = %params.uf, city = %params.city, "navigating to {}", POINTS_ROUTE);
        self.navigator.navigate(POINTS_ROUTE, params);
        self.mode = AppMode::Done;
    }

    /// Re-issues whichever fetch last failed.
    ///
    /// Returns `false` when there was nothing to retry.
    pub fn retry(&mut self) -> bool {
        if matches!(self.region_status, FetchStatus::Failed(_)) {
            self.request_states();
            return true;
        }
        if matches!(self.locality_status, FetchStatus::Failed(_)) && self.selected_region != UNSELECTED {
            self.request_cities();
            return true;
        }
        false
    }

    /// Applies the outcome of a fetch.
    ///
    /// City results issued before the latest request, or for a state that is no
    /// longer selected, are dropped. Returns whether the screen changed.
    pub fn apply(&mut self, event: FetchEvent) -> bool {
        match event {
            FetchEvent::States(Ok(options)) => {
                debug!(count = options.len(), "states loaded");
                self.region_options = options;
                self.region_status = FetchStatus::Loaded;
            }
            FetchEvent::States(Err(err)) => {
                warn!(error = %err, "failed to load states");
                self.region_status = FetchStatus::Failed(err.to_string());
            }
            FetchEvent::Cities { ticket, uf, result } => {
                if ticket != self.latest_ticket || uf != self.selected_region {
                    debug!(ticket, latest = self.latest_ticket, %uf, "discarding stale cities");
                    return false;
                }
                match result {
                    Ok(options) => {
                        debug!(count = options.len(), %uf, "cities loaded");
                        self.locality_options = options;
                        self.locality_status = FetchStatus::Loaded;
                    }
                    Err(err) => {
                        warn!(error = %err, %uf, "failed to load cities");
                        self.locality_status = FetchStatus::Failed(err.to_string());
                    }
                }
            }
        }
        true
    }

    fn request_states(&mut self) {
        self.region_status = FetchStatus::Loading;
        self.requests.push(FetchRequest::States);
    }

    fn request_cities(&mut self) {
        self.latest_ticket += 1;
        self.locality_options.clear();
        self.locality_status = FetchStatus::Loading;
        self.requests.push(FetchRequest::Cities {
            ticket: self.latest_ticket,
            uf: self.selected_region.clone(),
        });
    }

    pub fn options(&self, picker: Picker) -> &[SelectOption] {
        match picker {
            Picker::Region => &self.region_options,
            Picker::Locality => &self.locality_options,
        }
    }

    pub fn status(&self, picker: Picker) -> &FetchStatus {
        match picker {
            Picker::Region => &self.region_status,
            Picker::Locality => &self.locality_status,
        }
    }

    pub fn selected_value(&self, picker: Picker) -> &str {
        match picker {
            Picker::Region => &self.selected_region,
            Picker::Locality => &self.selected_locality,
        }
    }

    /// Text shown in the closed dropdown.
    pub fn selected_label(&self, picker: Picker) -> &str {
        let value = self.selected_value(picker);
        if value == UNSELECTED {
            return picker.placeholder();
        }
        self.options(picker)
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
            .unwrap_or(value)
    }

    /// Labels of the open dropdown, placeholder first.
    pub fn picker_entries(&self, picker: Picker) -> Vec<&str> {
        std::iter::once(picker.placeholder())
            .chain(self.options(picker).iter().map(|option| option.label.as_str()))
            .collect()
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Region => Focus::Locality,
            Focus::Locality => Focus::Submit,
            Focus::Submit => Focus::Region,
        };
    }

    pub fn focus_previous(&mut self) {
        self.focus = match self.focus {
            Focus::Region => Focus::Submit,
            Focus::Locality => Focus::Region,
            Focus::Submit => Focus::Locality,
        };
    }

    /// Opens the dropdown under focus, or submits when focus is on the button.
    pub fn activate(&mut self) {
        match self.focus {
            Focus::Region => self.open_picker(Picker::Region),
            Focus::Locality => self.open_picker(Picker::Locality),
            Focus::Submit => self.submit(),
        }
    }

    /// Opens a dropdown with the current selection highlighted.
    pub fn open_picker(&mut self, picker: Picker) {
        if self.status(picker).is_loading() {
            self.status_message = Some("Carregando...".to_string());
            return;
        }
        let value = self.selected_value(picker);
        self.picker_index = self
            .options(picker)
            .iter()
            .position(|option| option.value == value)
            .map(|i| i + 1)
            .unwrap_or(0);
        self.status_message = None;
        self.mode = AppMode::Picking(picker);
    }

    pub fn close_picker(&mut self) {
        self.mode = AppMode::Browsing;
    }

    pub fn picker_up(&mut self) {
        self.picker_index = self.picker_index.saturating_sub(1);
    }

    pub fn picker_down(&mut self) {
        if let AppMode::Picking(picker) = self.mode {
            let last = self.options(picker).len();
            if self.picker_index < last {
                self.picker_index += 1;
            }
        }
    }

    /// Highlights the next option whose label starts with `letter`, wrapping around.
    pub fn picker_jump(&mut self, letter: char) {
        let AppMode::Picking(picker) = self.mode else {
            return;
        };
        let options = self.options(picker);
        if options.is_empty() {
            return;
        }
        let wanted: String = letter.to_lowercase().collect();
        // Option i sits on row i + 1; search starts just past the highlighted row.
        let start = self.picker_index.min(options.len());
        let found = (0..options.len())
            .map(|step| (start + step) % options.len())
            .find(|&i| options[i].label.to_lowercase().starts_with(&wanted));
        if let Some(i) = found {
            self.picker_index = i + 1;
        }
    }

    /// Stores the highlighted entry and closes the dropdown.
    pub fn confirm_picker(&mut self) {
        let AppMode::Picking(picker) = self.mode else {
            return;
        };
        let value = match self.picker_index {
            0 => UNSELECTED.to_string(),
            i => match self.options(picker).get(i - 1) {
                Some(option) => option.value.clone(),
                None => return,
            },
        };
        self.mode = AppMode::Browsing;
        match picker {
            Picker::Region => {
                self.select_region(&value);
                self.focus = Focus::Locality;
            }
            Picker::Locality => {
                self.select_locality(&value);
                self.focus = Focus::Submit;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DirectoryError, Route};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingNavigator {
        routes: Rc<RefCell<Vec<Route>>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, route: &str, params: RouteParams) {
            self.routes.borrow_mut().push(Route {
                route: route.to_string(),
                params,
            });
        }
    }

    fn create_test_app() -> (App, Rc<RefCell<Vec<Route>>>) {
        let navigator = RecordingNavigator::default();
        let routes = navigator.routes.clone();
        (App::new(Box::new(navigator)), routes)
    }

    fn states(siglas: &[&str]) -> Vec<SelectOption> {
        siglas.iter().map(|s| SelectOption::new(*s, *s, *s)).collect()
    }

    fn cities(names: &[(u64, &str)]) -> Vec<SelectOption> {
        names
            .iter()
            .map(|(id, name)| SelectOption::new(id.to_string(), *name, *name))
            .collect()
    }

    fn failure() -> DirectoryError {
        DirectoryError::Status {
            url: "http://test/estados".to_string(),
            status: 500,
        }
    }

    fn last_ticket(app: &mut App) -> u64 {
        match app.take_requests().pop() {
            Some(FetchRequest::Cities { ticket, .. }) => ticket,
            other => panic!("expected a cities request, got {other:?}"),
        }
    }

    #[test]
    fn test_app_new() {
        let (app, routes) = create_test_app();
        assert_eq!(app.selected_region, "0");
        assert_eq!(app.selected_locality, "0");
        assert!(app.region_options.is_empty());
        assert!(app.locality_options.is_empty());
        assert_eq!(app.region_status, FetchStatus::Idle);
        assert_eq!(app.focus, Focus::Region);
        assert_eq!(app.mode, AppMode::Browsing);
        assert!(routes.borrow().is_empty());
    }

    #[test]
    fn test_initialize_requests_states_once() {
        let (mut app, _) = create_test_app();
        app.initialize();
        app.initialize();
        assert_eq!(app.take_requests(), vec![FetchRequest::States]);
        assert_eq!(app.region_status, FetchStatus::Loading);
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn test_states_loaded_scenario() {
        let (mut app, _) = create_test_app();
        app.initialize();
        app.take_requests();

        assert!(app.apply(FetchEvent::States(Ok(states(&["SP", "RJ"])))));
        assert_eq!(
            app.region_options,
            vec![SelectOption::new("SP", "SP", "SP"), SelectOption::new("RJ", "RJ", "RJ")]
        );
        assert_eq!(app.region_status, FetchStatus::Loaded);
    }

    #[test]
    fn test_select_region_issues_one_cities_request() {
        let (mut app, _) = create_test_app();
        app.select_region("SP");
        assert_eq!(
            app.take_requests(),
            vec![FetchRequest::Cities { ticket: 1, uf: "SP".to_string() }]
        );
        assert_eq!(app.locality_status, FetchStatus::Loading);

        app.select_region("RJ");
        assert_eq!(
            app.take_requests(),
            vec![FetchRequest::Cities { ticket: 2, uf: "RJ".to_string() }]
        );
    }

    #[test]
    fn test_reselecting_same_region_issues_nothing() {
        let (mut app, _) = create_test_app();
        app.select_region("SP");
        app.take_requests();
        app.select_region("SP");
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn test_sentinel_region_issues_no_request_and_keeps_list() {
        let (mut app, _) = create_test_app();
        app.select_region("SP");
        let ticket = last_ticket(&mut app);
        app.apply(FetchEvent::Cities {
            ticket,
            uf: "SP".to_string(),
            result: Ok(cities(&[(1, "Santos")])),
        });

        app.select_region("0");
        assert!(app.take_requests().is_empty());
        assert_eq!(app.locality_options, cities(&[(1, "Santos")]));
        assert_eq!(app.selected_locality, "0");
    }

    #[test]
    fn test_cities_loaded_scenario() {
        let (mut app, _) = create_test_app();
        app.select_region("SP");
        let ticket = last_ticket(&mut app);

        let changed = app.apply(FetchEvent::Cities {
            ticket,
            uf: "SP".to_string(),
            result: Ok(cities(&[(1, "Santos")])),
        });
        assert!(changed);
        assert_eq!(app.locality_options, vec![SelectOption::new("1", "Santos", "Santos")]);
        assert_eq!(app.locality_status, FetchStatus::Loaded);
    }

    #[test]
    fn test_stale_cities_response_is_discarded() {
        let (mut app, _) = create_test_app();
        app.select_region("SP");
        let sp_ticket = last_ticket(&mut app);
        app.select_region("RJ");
        let rj_ticket = last_ticket(&mut app);

        // RJ answers first, then the slower SP request resolves.
        assert!(app.apply(FetchEvent::Cities {
            ticket: rj_ticket,
            uf: "RJ".to_string(),
            result: Ok(cities(&[(3, "Niterói")])),
        }));
        assert!(!app.apply(FetchEvent::Cities {
            ticket: sp_ticket,
            uf: "SP".to_string(),
            result: Ok(cities(&[(1, "Santos")])),
        }));
        assert_eq!(app.locality_options, cities(&[(3, "Niterói")]));
    }

    #[test]
    fn test_cities_for_deselected_region_are_discarded() {
        let (mut app, _) = create_test_app();
        app.select_region("SP");
        let ticket = last_ticket(&mut app);
        app.select_region("0");
        assert_eq!(app.locality_status, FetchStatus::Idle);

        assert!(!app.apply(FetchEvent::Cities {
            ticket,
            uf: "SP".to_string(),
            result: Ok(cities(&[(1, "Santos")])),
        }));
        assert!(app.locality_options.is_empty());
    }

    #[test]
    fn test_deselecting_region_clears_cities_failure() {
        let (mut app, _) = create_test_app();
        app.select_region("SP");
        let ticket = last_ticket(&mut app);
        app.apply(FetchEvent::Cities {
            ticket,
            uf: "SP".to_string(),
            result: Err(failure()),
        });
        assert!(matches!(app.locality_status, FetchStatus::Failed(_)));

        app.select_region("0");
        assert_eq!(app.locality_status, FetchStatus::Idle);
        assert!(!app.retry());
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn test_region_change_resets_locality() {
        let (mut app, _) = create_test_app();
        app.select_region("SP");
        app.select_locality("Santos");
        app.select_region("RJ");
        assert_eq!(app.selected_locality, "0");
        assert!(app.locality_options.is_empty());
    }

    #[test]
    fn test_failed_states_keeps_list_and_reports() {
        let (mut app, _) = create_test_app();
        app.initialize();
        app.apply(FetchEvent::States(Ok(states(&["SP"]))));
        app.apply(FetchEvent::States(Err(failure())));

        assert_eq!(app.region_options, states(&["SP"]));
        assert!(matches!(app.region_status, FetchStatus::Failed(ref msg) if msg.contains("500")));
    }

    #[test]
    fn test_failed_cities_keeps_prior_list() {
        let (mut app, _) = create_test_app();
        app.select_region("SP");
        let ticket = last_ticket(&mut app);
        app.apply(FetchEvent::Cities {
            ticket,
            uf: "SP".to_string(),
            result: Err(failure()),
        });
        assert!(app.locality_options.is_empty());
        assert!(matches!(app.locality_status, FetchStatus::Failed(_)));
    }

    #[test]
    fn test_retry_reissues_failed_fetches() {
        let (mut app, _) = create_test_app();
        assert!(!app.retry());

        app.initialize();
        app.take_requests();
        app.apply(FetchEvent::States(Err(failure())));
        assert!(app.retry());
        assert_eq!(app.take_requests(), vec![FetchRequest::States]);
        app.apply(FetchEvent::States(Ok(states(&["SP"]))));

        app.select_region("SP");
        let ticket = last_ticket(&mut app);
        app.apply(FetchEvent::Cities {
            ticket,
            uf: "SP".to_string(),
            result: Err(failure()),
        });
        assert!(app.retry());
        assert_eq!(
            app.take_requests(),
            vec![FetchRequest::Cities { ticket: ticket + 1, uf: "SP".to_string() }]
        );
    }

    #[test]
    fn test_submit_forwards_selection() {
        let (mut app, routes) = create_test_app();
        app.select_region("SP");
        app.select_locality("Santos");
        app.submit();

        assert_eq!(
            *routes.borrow(),
            vec![Route::points(RouteParams {
                uf: "SP".to_string(),
                city: "Santos".to_string(),
            })]
        );
        assert_eq!(app.mode, AppMode::Done);
    }

    #[test]
    fn test_submit_without_selection_forwards_sentinels() {
        let (mut app, routes) = create_test_app();
        app.submit();
        assert_eq!(*routes.borrow(), vec![Route::points(RouteParams::default())]);
    }

    #[test]
    fn test_selected_label_falls_back_to_placeholder() {
        let (mut app, _) = create_test_app();
        assert_eq!(app.selected_label(Picker::Region), REGION_PLACEHOLDER);
        assert_eq!(app.selected_label(Picker::Locality), LOCALITY_PLACEHOLDER);

        app.apply(FetchEvent::States(Ok(states(&["SP"]))));
        app.select_region("SP");
        assert_eq!(app.selected_label(Picker::Region), "SP");
    }

    #[test]
    fn test_focus_cycles_through_controls() {
        let (mut app, _) = create_test_app();
        app.focus_next();
        assert_eq!(app.focus, Focus::Locality);
        app.focus_next();
        assert_eq!(app.focus, Focus::Submit);
        app.focus_next();
        assert_eq!(app.focus, Focus::Region);
        app.focus_previous();
        assert_eq!(app.focus, Focus::Submit);
    }

    #[test]
    fn test_picker_confirm_selects_highlighted_option() {
        let (mut app, _) = create_test_app();
        app.apply(FetchEvent::States(Ok(states(&["SP", "RJ"]))));

        app.open_picker(Picker::Region);
        assert_eq!(app.mode, AppMode::Picking(Picker::Region));
        assert_eq!(app.picker_index, 0);
        app.picker_down();
        app.picker_down();
        app.picker_down();
        assert_eq!(app.picker_index, 2);
        app.confirm_picker();

        assert_eq!(app.selected_region, "RJ");
        assert_eq!(app.mode, AppMode::Browsing);
        assert_eq!(app.focus, Focus::Locality);
        assert_eq!(
            app.take_requests(),
            vec![FetchRequest::Cities { ticket: 1, uf: "RJ".to_string() }]
        );
    }

    #[test]
    fn test_picker_placeholder_selects_sentinel() {
        let (mut app, _) = create_test_app();
        app.apply(FetchEvent::States(Ok(states(&["SP"]))));
        app.select_region("SP");
        app.take_requests();

        app.open_picker(Picker::Region);
        assert_eq!(app.picker_index, 1);
        app.picker_up();
        app.confirm_picker();
        assert_eq!(app.selected_region, "0");
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn test_picker_does_not_open_while_loading() {
        let (mut app, _) = create_test_app();
        app.select_region("SP");
        app.open_picker(Picker::Locality);
        assert_eq!(app.mode, AppMode::Browsing);
        assert_eq!(app.status_message.as_deref(), Some("Carregando..."));
    }

    #[test]
    fn test_picker_jump_wraps_to_matching_label() {
        let (mut app, _) = create_test_app();
        app.select_region("SP");
        let ticket = last_ticket(&mut app);
        app.apply(FetchEvent::Cities {
            ticket,
            uf: "SP".to_string(),
            result: Ok(cities(&[(1, "Santos"), (2, "Campinas"), (3, "Sorocaba")])),
        });

        app.open_picker(Picker::Locality);
        app.picker_jump('s');
        assert_eq!(app.picker_index, 1);
        app.picker_jump('S');
        assert_eq!(app.picker_index, 3);
        app.picker_jump('s');
        assert_eq!(app.picker_index, 1);
        app.picker_jump('x');
        assert_eq!(app.picker_index, 1);

        app.picker_jump('c');
        app.confirm_picker();
        assert_eq!(app.selected_locality, "Campinas");
        assert_eq!(app.focus, Focus::Submit);
    }

    #[test]
    fn test_picker_entries_start_with_placeholder() {
        let (mut app, _) = create_test_app();
        app.apply(FetchEvent::States(Ok(states(&["SP", "RJ"]))));
        assert_eq!(app.picker_entries(Picker::Region), vec![REGION_PLACEHOLDER, "SP", "RJ"]);
        assert_eq!(app.picker_entries(Picker::Locality), vec![LOCALITY_PLACEHOLDER]);
    }
}
