use crate::config::Config;
use crate::domain::{
    build_dashboard, cycle_option, Category, Dashboard, Priority, Task, TaskDraft, TaskFilter, TaskId, UiMode,
};
use crate::error::Result;
use crate::notifications::{NotificationHost, Permission};
use crate::store::TaskStore;
use crate::ticker::DueSoonNotifier;
use chrono::{DateTime, Local};
use std::time::Instant;
use tracing::{debug, warn};

/// Number of fields in the add-task form
pub const FORM_FIELDS: usize = 6;

/// Form field indices
pub const FIELD_NAME: usize = 0;
pub const FIELD_DATE: usize = 1;
pub const FIELD_TIME: usize = 2;
pub const FIELD_TIMEZONE: usize = 3;
pub const FIELD_PRIORITY: usize = 4;
pub const FIELD_CATEGORY: usize = 5;

/// Input form state for adding tasks
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub name: String,
    pub due_date: String, // YYYY-MM-DD
    pub due_time: String, // HH:MM
    pub timezone: String,
    pub priority: Priority,
    pub category: Category,
    pub editing_field: usize,
}

impl InputFormState {
    pub fn new(config: &Config) -> Self {
        Self {
            name: String::new(),
            due_date: String::new(),
            due_time: String::new(),
            timezone: config.default_timezone.clone(),
            priority: config.default_priority,
            category: config.default_category,
            editing_field: FIELD_NAME,
        }
    }

    /// Text buffer for the field being edited (None on choice fields)
    fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.editing_field {
            FIELD_NAME => Some(&mut self.name),
            FIELD_DATE => Some(&mut self.due_date),
            FIELD_TIME => Some(&mut self.due_time),
            FIELD_TIMEZONE => Some(&mut self.timezone),
            _ => None,
        }
    }

    /// Step the current choice field forward
    fn cycle_choice(&mut self) {
        match self.editing_field {
            FIELD_PRIORITY => {
                let all = Priority::all();
                let idx = all.iter().position(|p| *p == self.priority).unwrap_or(0);
                self.priority = all[(idx + 1) % all.len()];
            }
            FIELD_CATEGORY => {
                let all = Category::all();
                let idx = all.iter().position(|c| *c == self.category).unwrap_or(0);
                self.category = all[(idx + 1) % all.len()];
            }
            _ => {}
        }
    }

    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            name: self.name.clone(),
            due_date: non_empty(&self.due_date),
            due_time: non_empty(&self.due_time),
            timezone: self.timezone.trim().to_string(),
            priority: self.priority,
            category: self.category,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Main application state
pub struct AppState {
    pub store: TaskStore,
    pub filter: TaskFilter,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub status_message: Option<String>,
    pub config: Config,
    pub notifier: DueSoonNotifier,
    host: Box<dyn NotificationHost>,
}

impl AppState {
    pub fn new(config: Config, host: Box<dyn NotificationHost>) -> Self {
        let notifier = DueSoonNotifier::new(config.scan_interval(), config.due_soon_window());
        Self {
            store: TaskStore::new(),
            filter: TaskFilter::default(),
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
            status_message: None,
            config,
            notifier,
            host,
        }
    }

    /// Ask for notification permission if undecided and start the scanner
    pub fn startup(&mut self, now: Instant) {
        if self.host.permission() == Permission::Default {
            let permission = self.host.request_permission();
            debug!(?permission, "notification permission requested");
        }
        self.notifier.start(now);
    }

    /// Cancel the scanner
    pub fn shutdown(&mut self) {
        self.notifier.stop();
    }

    pub fn permission(&self) -> Permission {
        self.host.permission()
    }

    /// Filtered view, counters and theme for the current snapshot
    pub fn dashboard(&self) -> Dashboard<'_> {
        build_dashboard(self.store.tasks(), &self.filter)
    }

    pub fn visible_tasks(&self) -> Vec<&Task> {
        crate::domain::views::filter_tasks(self.store.tasks(), &self.filter)
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.visible_tasks().get(self.selected_index).map(|t| t.id)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        let len = self.visible_tasks().len();
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the visible list
    fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    pub fn add_task(&mut self, draft: TaskDraft) -> Result<TaskId> {
        let id = self.store.add_task(draft)?;
        self.selected_index = 0;
        self.clamp_selection();
        Ok(id)
    }

    pub fn delete_task(&mut self, id: TaskId) {
        self.store.delete_task(id);
        self.clamp_selection();
    }

    pub fn toggle_task(&mut self, id: TaskId) {
        self.store.toggle_task(id);
        self.clamp_selection();
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.delete_task(id);
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.toggle_task(id);
        }
    }

    pub fn cycle_status_filter(&mut self) {
        self.filter.status = self.filter.status.next();
        self.clamp_selection();
    }

    pub fn cycle_priority_filter(&mut self) {
        self.filter.priority = cycle_option(self.filter.priority, Priority::all());
        self.clamp_selection();
    }

    pub fn cycle_category_filter(&mut self) {
        self.filter.category = cycle_option(self.filter.category, Category::all());
        self.clamp_selection();
    }

    pub fn clear_filters(&mut self) {
        self.filter = TaskFilter::default();
        self.clamp_selection();
    }

    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState::new(&self.config));
        self.ui_mode = UiMode::AddingTask;
        self.status_message = None;
    }

    pub fn input_form_next_field(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.editing_field = (form.editing_field + 1) % FORM_FIELDS;
        }
    }

    pub fn input_form_prev_field(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.editing_field = (form.editing_field + FORM_FIELDS - 1) % FORM_FIELDS;
        }
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            if let Some(text) = form.active_text_mut() {
                text.push(c);
            } else if c == ' ' {
                form.cycle_choice();
            }
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            if let Some(text) = form.active_text_mut() {
                text.pop();
            }
        }
    }

    pub fn input_form_cycle_choice(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.cycle_choice();
        }
    }

    /// Create the task from the form. An invalid form stays open with a message.
    pub fn submit_input_form(&mut self) {
        let Some(draft) = self.input_form.as_ref().map(InputFormState::to_draft) else {
            return;
        };
        match self.add_task(draft) {
            Ok(_) => {
                self.input_form = None;
                self.ui_mode = UiMode::Normal;
                self.status_message = None;
            }
            Err(e) => {
                warn!(error = %e, "task not added");
                self.status_message = Some(e.to_string());
            }
        }
    }

    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
        self.status_message = None;
    }

    /// Advance the due-soon scanner
    pub fn tick(&mut self) {
        self.tick_at(Instant::now(), Local::now());
    }

    pub fn tick_at(&mut self, instant: Instant, now: DateTime<Local>) -> Vec<TaskId> {
        self.notifier.tick(&mut self.store, self.host.as_mut(), instant, now)
    }
}
