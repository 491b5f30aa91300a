//! Application container.
//!
//! [`App`] owns the theme store and the contact service. Rendering code gets
//! a [`ThemeView`] and the theme operations; nothing else writes the flag.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::{bail, Context, Result};

use crate::cli::{Cli, Command, ThemeAction};
use crate::config::SiteConfig;
use crate::domain::{self, SkillLevel};
use crate::services::{
    watch_system_preference, ContactForm, ContactService, EmailJsClient, EmailRelay, FileStorage,
    PreferenceProbe, PreferenceWatcher, SharedThemeStore, SubmitOutcome, SystemPreference,
    ThemeSource, ThemeStorage, ThemeStore, ThemeView, DEFAULT_PREFERENCE_POLL,
};
use crate::ui::Theme;

/// Theme store and contact service for one page session.
pub struct App<S, P, R>
where
    S: ThemeStorage,
    P: PreferenceProbe,
    R: EmailRelay,
{
    theme: SharedThemeStore<S, P>,
    contact: ContactService<R>,
}

/// The production wiring: file storage, desktop preference, EmailJS.
pub type SiteApp = App<FileStorage, SystemPreference, EmailJsClient>;

impl SiteApp {
    /// Builds the app from configuration and resolves the startup theme.
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        let storage = Arc::new(FileStorage::new(&config.data_dir));
        let theme = ThemeStore::new(storage, Arc::new(SystemPreference));

        let relay = EmailJsClient::new(&config.emailjs.endpoint)
            .context("failed to create EmailJS client")?;
        let contact = ContactService::new(
            Arc::new(relay),
            config.emailjs.clone(),
            config.contact_email.clone(),
        );

        let app = Self::new(theme, contact);
        let source = app.initialize_theme();
        tracing::info!(?source, dark = app.is_dark(), "theme initialized");
        Ok(app)
    }
}

impl<S, P, R> App<S, P, R>
where
    S: ThemeStorage + 'static,
    P: PreferenceProbe + 'static,
    R: EmailRelay + 'static,
{
    /// Wraps an uninitialized theme store and a contact service.
    pub fn new(theme: ThemeStore<S, P>, contact: ContactService<R>) -> Self {
        Self {
            theme: Arc::new(Mutex::new(theme)),
            contact,
        }
    }

    /// Runs the startup theme resolution.
    pub fn initialize_theme(&self) -> ThemeSource {
        self.theme_store().initialize()
    }

    /// Returns whether dark mode is active.
    pub fn is_dark(&self) -> bool {
        self.theme_store().theme()
    }

    /// Returns the active theme with its palette.
    pub fn theme(&self) -> Theme {
        Theme::new(self.is_dark())
    }

    /// Sets the theme explicitly.
    pub fn set_theme(&self, is_dark: bool) {
        self.theme_store().set_theme(is_dark);
    }

    /// Flips the theme and returns the new flag.
    pub fn toggle_theme(&self) -> bool {
        self.theme_store().toggle_theme()
    }

    /// Read-only view for rendering code.
    pub fn theme_view(&self) -> ThemeView {
        self.theme_store().view()
    }

    /// Shared handle for background tasks such as the preference watcher.
    pub fn shared_theme(&self) -> SharedThemeStore<S, P> {
        Arc::clone(&self.theme)
    }

    /// Starts forwarding system color scheme changes to the theme store.
    pub fn follow_system_preference<Q>(&self, probe: Arc<Q>) -> PreferenceWatcher
    where
        Q: PreferenceProbe + 'static,
    {
        watch_system_preference(self.shared_theme(), probe, DEFAULT_PREFERENCE_POLL)
    }

    /// The contact submission flow.
    pub fn contact(&self) -> &ContactService<R> {
        &self.contact
    }

    /// Executes one command line invocation.
    pub async fn run(&self, cli: Cli) -> Result<()> {
        match cli.command {
            Command::Theme { action } => {
                self.apply_theme_action(action);
                println!("{}", if self.is_dark() { "dark" } else { "light" });
            }
            Command::Contact {
                name,
                email,
                subject,
                message,
            } => {
                self.contact
                    .set_form(ContactForm::new(name, email, subject, message));
                let outcome = self.contact.submit().await;
                self.contact.shutdown();
                match outcome {
                    SubmitOutcome::Sent => println!("Message sent successfully!"),
                    SubmitOutcome::Invalid => bail!(crate::error::VALIDATION_MESSAGE),
                    SubmitOutcome::Failed(reason) => bail!(reason),
                    SubmitOutcome::Busy => bail!("a message is already being sent"),
                }
            }
            Command::Skills { level } => {
                let level = match level.as_deref() {
                    Some(raw) => Some(
                        SkillLevel::parse(raw)
                            .with_context(|| format!("unknown skill level: {raw}"))?,
                    ),
                    None => None,
                };
                for category in domain::SKILL_CATEGORIES {
                    let skills: Vec<_> = category
                        .skills
                        .iter()
                        .filter(|s| level.map_or(true, |l| s.level == l))
                        .collect();
                    if skills.is_empty() {
                        continue;
                    }
                    println!("{}", category.name);
                    for skill in skills {
                        println!("  {:<22} {}", skill.name, skill.level.label());
                    }
                }
            }
            Command::Projects { featured } => {
                let projects = if featured {
                    domain::featured_projects()
                } else {
                    domain::PROJECTS.iter().collect()
                };
                for project in projects {
                    println!("{:>2}. {}", project.id, project.title);
                    let summary =
                        domain::truncate_text(project.description, domain::DEFAULT_TRUNCATE);
                    println!("    {summary}");
                    if let Some(url) = project.live_url() {
                        println!("    live: {url}");
                    }
                }
            }
        }
        Ok(())
    }

    fn apply_theme_action(&self, action: ThemeAction) {
        let mut store = self.theme_store();
        match action {
            ThemeAction::Show => {}
            ThemeAction::Toggle => {
                store.toggle_theme();
            }
            ThemeAction::Dark => store.set_theme(true),
            ThemeAction::Light => store.set_theme(false),
            ThemeAction::System => store.clear_choice(),
        }
    }

    fn theme_store(&self) -> MutexGuard<'_, ThemeStore<S, P>> {
        self.theme.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
