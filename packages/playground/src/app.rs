//! Application state shared by the event loop and the renderer
//!
//! Slow work (password hashing, signing, verifying) runs on spawned tasks.
//! Their results come back as [`AppEvent`]s over an unbounded channel and are
//! folded in by [`App::handle_event`] on the UI task, so the UI never waits.

use crate::config::PlaygroundConfig;
use crate::edit::{self, TextEdit};
use crate::notify::{Clipboard, Toast, ToastQueue};
use crate::panels::{
    Argon2Form, BcryptForm, PanelId, PasswordPanel, TokenPanel, VerifyOutcome, XxhashPanel,
};
use hashlab_common::LoggingTransformer;
use hashlab_hashing::{AsyncHashResult, HashResult};
use hashlab_jwt::{CycleOutcome, Document, JwtResult, TokenCycle};
use hashlab_key::KeyProvisioner;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// A text field that can take keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    /// Argon2 password to hash
    Argon2Password,
    /// Argon2 password to check
    Argon2Candidate,
    /// Argon2 hash to check against
    Argon2Hash,
    /// Argon2 passes
    Argon2TimeCost,
    /// Argon2 lanes
    Argon2Parallelism,
    /// Argon2 memory in KiB
    Argon2MemoryCost,
    /// bcrypt password to hash
    BcryptPassword,
    /// bcrypt password to check
    BcryptCandidate,
    /// bcrypt hash to check against
    BcryptHash,
    /// bcrypt work factor
    BcryptCost,
    /// Text to fast-hash
    XxhashInput,
    /// Fast-hash seed
    XxhashSeed,
    /// Token claims JSON
    Claims,
    /// Token header JSON
    Header,
    /// Token pasted for verification
    Token,
}

impl InputField {
    /// Field title
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            InputField::Argon2Password | InputField::BcryptPassword => "Password",
            InputField::Argon2Candidate | InputField::BcryptCandidate => "Password to check",
            InputField::Argon2Hash | InputField::BcryptHash => "Hash to check",
            InputField::Argon2TimeCost => "Time cost",
            InputField::Argon2Parallelism => "Parallelism",
            InputField::Argon2MemoryCost => "Memory (KiB)",
            InputField::BcryptCost => "Cost",
            InputField::XxhashInput => "Input",
            InputField::XxhashSeed => "Seed",
            InputField::Claims => "Claims",
            InputField::Header => "Header",
            InputField::Token => "Token",
        }
    }

    /// Masked when rendered
    #[must_use]
    pub fn is_secret(self) -> bool {
        matches!(
            self,
            InputField::Argon2Password
                | InputField::Argon2Candidate
                | InputField::BcryptPassword
                | InputField::BcryptCandidate
        )
    }

    /// Panel the field lives on
    #[must_use]
    pub fn panel(self) -> PanelId {
        match self {
            InputField::Argon2Password
            | InputField::Argon2Candidate
            | InputField::Argon2Hash
            | InputField::Argon2TimeCost
            | InputField::Argon2Parallelism
            | InputField::Argon2MemoryCost => PanelId::Argon2,
            InputField::BcryptPassword
            | InputField::BcryptCandidate
            | InputField::BcryptHash
            | InputField::BcryptCost => PanelId::Bcrypt,
            InputField::XxhashInput | InputField::XxhashSeed => PanelId::Xxhash,
            InputField::Claims | InputField::Header | InputField::Token => PanelId::Token,
        }
    }
}

/// Keyboard mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppMode {
    /// Keys navigate and trigger actions
    #[default]
    Normal,
    /// Keys edit a field
    Input(InputField),
}

/// Result of background work, delivered to the UI task
#[derive(Debug)]
pub enum AppEvent {
    /// A password hash finished
    Hashed {
        /// Panel that asked
        panel: PanelId,
        /// The hash or why it failed
        result: hashlab_hashing::Result<HashResult<String>>,
    },
    /// A password check finished
    Checked {
        /// Panel that asked
        panel: PanelId,
        /// Match, mismatch or unusable hash
        result: VerifyOutcome,
    },
    /// A token issue/verify cycle finished
    TokenCycle(JwtResult<CycleOutcome>),
}

/// Whole-application state
pub struct App {
    /// Panel on screen
    pub active: PanelId,
    /// Keyboard mode
    pub mode: AppMode,
    /// Argon2 panel
    pub argon2: PasswordPanel<Argon2Form>,
    /// bcrypt panel
    pub bcrypt: PasswordPanel<BcryptForm>,
    /// xxHash panel
    pub xxhash: XxhashPanel,
    /// Token panel
    pub token: TokenPanel,
    /// Notifications on screen
    pub toasts: ToastQueue,
    config: PlaygroundConfig,
    clipboard: Box<dyn Clipboard>,
    events: UnboundedSender<AppEvent>,
    cursor: usize,
    should_quit: bool,
}

impl App {
    /// Build the panels from `config`
    ///
    /// The token panel takes its key pair from `provisioner`; if that fails
    /// only the token panel is disabled. Background results arrive on the
    /// returned receiver and must be passed to [`App::handle_event`].
    pub fn new(
        config: PlaygroundConfig,
        clipboard: Box<dyn Clipboard>,
        provisioner: &KeyProvisioner,
    ) -> (Self, UnboundedReceiver<AppEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let app = Self {
            active: PanelId::default(),
            mode: AppMode::Normal,
            argon2: PasswordPanel::new(Argon2Form::new(config.argon2)),
            bcrypt: PasswordPanel::new(BcryptForm::new(config.bcrypt.cost)),
            xxhash: XxhashPanel::new(config.xxhash.variant, config.xxhash.seed),
            token: TokenPanel::new(provisioner, &config),
            toasts: ToastQueue::new(config.toast_duration()),
            config,
            clipboard,
            events,
            cursor: 0,
            should_quit: false,
        };
        (app, receiver)
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &PlaygroundConfig {
        &self.config
    }

    /// Whether the loop should stop
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Ask the loop to stop
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Show `panel`; other panels keep their state
    pub fn select(&mut self, panel: PanelId) {
        self.active = panel;
    }

    /// Show the next panel
    pub fn next_panel(&mut self) {
        self.select(self.active.next());
    }

    /// Show the previous panel
    pub fn previous_panel(&mut self) {
        self.select(self.active.previous());
    }

    /// Issue the first token; call once from inside the runtime
    pub fn start(&mut self) {
        if let Some(cycle) = self.token.reissue() {
            self.dispatch(cycle);
        }
    }

    /// Text behind `field`
    #[must_use]
    pub fn field_text(&self, field: InputField) -> &str {
        match field {
            InputField::Argon2Password => &self.argon2.password,
            InputField::Argon2Candidate => &self.argon2.candidate,
            InputField::Argon2Hash => &self.argon2.target_hash,
            InputField::Argon2TimeCost => &self.argon2.form.time_cost,
            InputField::Argon2Parallelism => &self.argon2.form.parallelism,
            InputField::Argon2MemoryCost => &self.argon2.form.memory_cost,
            InputField::BcryptPassword => &self.bcrypt.password,
            InputField::BcryptCandidate => &self.bcrypt.candidate,
            InputField::BcryptHash => &self.bcrypt.target_hash,
            InputField::BcryptCost => &self.bcrypt.form.cost,
            InputField::XxhashInput => &self.xxhash.input,
            InputField::XxhashSeed => &self.xxhash.seed,
            InputField::Claims => &self.token.claims_buffer,
            InputField::Header => &self.token.header_buffer,
            InputField::Token => &self.token.token_buffer,
        }
    }

    /// Editable text behind `field`
    pub fn field_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Argon2Password => &mut self.argon2.password,
            InputField::Argon2Candidate => &mut self.argon2.candidate,
            InputField::Argon2Hash => &mut self.argon2.target_hash,
            InputField::Argon2TimeCost => &mut self.argon2.form.time_cost,
            InputField::Argon2Parallelism => &mut self.argon2.form.parallelism,
            InputField::Argon2MemoryCost => &mut self.argon2.form.memory_cost,
            InputField::BcryptPassword => &mut self.bcrypt.password,
            InputField::BcryptCandidate => &mut self.bcrypt.candidate,
            InputField::BcryptHash => &mut self.bcrypt.target_hash,
            InputField::BcryptCost => &mut self.bcrypt.form.cost,
            InputField::XxhashInput => &mut self.xxhash.input,
            InputField::XxhashSeed => &mut self.xxhash.seed,
            InputField::Claims => &mut self.token.claims_buffer,
            InputField::Header => &mut self.token.header_buffer,
            InputField::Token => &mut self.token.token_buffer,
        }
    }

    /// Switch to editing `field`, loading token buffers from the session
    pub fn begin_input(&mut self, field: InputField) {
        match field {
            InputField::Claims => self.token.begin_edit(Document::Claims),
            InputField::Header => self.token.begin_edit(Document::Header),
            InputField::Token => self.token.begin_paste(),
            _ => {}
        }
        self.cursor = self.field_text(field).chars().count();
        self.mode = AppMode::Input(field);
    }

    /// Cursor position, in characters, within the field being edited
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply one keystroke to `field` at the cursor
    pub fn edit(&mut self, field: InputField, keystroke: TextEdit) {
        let mut cursor = self.cursor;
        edit::apply(self.field_mut(field), &mut cursor, keystroke);
        self.cursor = cursor;
    }

    /// Act on Enter in `field`
    pub fn submit(&mut self, field: InputField) {
        match field {
            InputField::Argon2Password => self.hash(PanelId::Argon2),
            InputField::BcryptPassword => self.hash(PanelId::Bcrypt),
            InputField::Argon2Candidate | InputField::Argon2Hash => self.verify(PanelId::Argon2),
            InputField::BcryptCandidate | InputField::BcryptHash => self.verify(PanelId::Bcrypt),
            InputField::XxhashInput | InputField::XxhashSeed => {
                self.xxhash.compute(self.config.failure_mode);
            }
            InputField::Claims => self.submit_document(Document::Claims),
            InputField::Header => self.submit_document(Document::Header),
            InputField::Token => {
                if let Some(cycle) = self.token.submit_paste() {
                    self.dispatch(cycle);
                }
            }
            // Cost fields are read when the next hash starts
            InputField::Argon2TimeCost
            | InputField::Argon2Parallelism
            | InputField::Argon2MemoryCost
            | InputField::BcryptCost => {}
        }
    }

    fn submit_document(&mut self, document: Document) {
        match self.token.submit_edit(document) {
            Some(cycle) => self.dispatch(cycle),
            None => {
                if let Some((_, e)) = self.token.parse_error() {
                    let toast = Toast::warning(format!("{document:?} not applied"))
                        .with_description(e.to_string());
                    self.toasts.push(toast);
                }
            }
        }
    }

    /// Start hashing on a password panel; ignored while disabled
    pub fn hash(&mut self, panel: PanelId) {
        let job = match panel {
            PanelId::Argon2 => self.argon2.start_hash(),
            PanelId::Bcrypt => self.bcrypt.start_hash(),
            PanelId::Xxhash | PanelId::Token => None,
        };
        if let Some(job) = job {
            self.forward_hash(panel, job);
        }
    }

    /// Start verifying on a password panel; ignored while disabled
    pub fn verify(&mut self, panel: PanelId) {
        let job = match panel {
            PanelId::Argon2 => self.argon2.start_verify(),
            PanelId::Bcrypt => self.bcrypt.start_verify(),
            PanelId::Xxhash | PanelId::Token => None,
        };
        if let Some(job) = job {
            let events = self.events.clone();
            tokio::spawn(async move {
                let result = job.await;
                let _ = events.send(AppEvent::Checked { panel, result });
            });
        }
    }

    fn forward_hash(&self, panel: PanelId, job: AsyncHashResult<HashResult<String>>) {
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = job.await;
            let _ = events.send(AppEvent::Hashed { panel, result });
        });
    }

    /// Run a token cycle in the background
    pub fn dispatch(&self, cycle: TokenCycle) {
        let events = self.events.clone();
        let job = cycle.spawn();
        tokio::spawn(async move {
            let _ = events.send(AppEvent::TokenCycle(job.await));
        });
    }

    /// Fold a background result into the panels
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Hashed { panel, result } => {
                let toast = match &result {
                    Ok(hashed) => Toast::success(format!("{panel} hash ready"))
                        .with_description(format!("{} ms", hashed.elapsed_ms())),
                    Err(e) => Toast::error(format!("{panel} hash failed"))
                        .with_description(e.to_string()),
                };
                let mode = self.config.failure_mode;
                match panel {
                    PanelId::Argon2 => self.argon2.finish_hash(result, mode),
                    PanelId::Bcrypt => self.bcrypt.finish_hash(result, mode),
                    PanelId::Xxhash | PanelId::Token => return,
                }
                self.toasts.push(toast);
            }
            AppEvent::Checked { panel, result } => match panel {
                PanelId::Argon2 => self.argon2.finish_verify(result),
                PanelId::Bcrypt => self.bcrypt.finish_verify(result),
                PanelId::Xxhash | PanelId::Token => {}
            },
            AppEvent::TokenCycle(Ok(outcome)) => {
                self.token.apply(outcome);
            }
            AppEvent::TokenCycle(Err(e)) => {
                LoggingTransformer::log_operation_error("token cycle", &e);
            }
        }
    }

    /// Text the `y` key copies on the active panel
    #[must_use]
    pub fn current_result(&self) -> Option<String> {
        match self.active {
            PanelId::Argon2 => self.argon2.output().map(|h| h.value().clone()),
            PanelId::Bcrypt => self.bcrypt.output().map(|h| h.value().clone()),
            PanelId::Xxhash => self.xxhash.output().map(|d| d.value().to_hex()),
            PanelId::Token => self
                .token
                .session()
                .map(|s| s.token().to_string())
                .filter(|t| !t.is_empty()),
        }
    }

    /// Copy the active panel's result
    pub fn copy_current(&mut self) {
        match self.current_result() {
            Some(text) => self.copy("Result", &text),
            None => self.toasts.push(Toast::warning("Nothing to copy")),
        }
    }

    /// Copy the token panel's public key
    pub fn copy_public_key(&mut self) {
        if let Some(key) = self.token.session().map(|s| s.public_key().to_string()) {
            self.copy("Public key", &key);
        }
    }

    fn copy(&mut self, what: &str, text: &str) {
        match self.clipboard.set_text(text) {
            Ok(()) => self
                .toasts
                .push(Toast::success("Copied to clipboard").with_description(what)),
            Err(e) => {
                LoggingTransformer::log_clipboard_failure(&e);
                if self.config.surface_clipboard_errors {
                    self.toasts
                        .push(Toast::error("Copy failed").with_description(e.user_message()));
                }
            }
        }
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        self.toasts.expire();
    }
}

