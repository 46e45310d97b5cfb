use anyhow::{Context, Result};
use sanepath_config::{Settings, SettingsStore};
use std::io::Write;

pub fn handle_show(out: &mut impl Write, store: &SettingsStore) -> Result<()> {
    let settings = store.load().context("Failed to load settings")?;
    let policy = settings.policy();

    writeln!(out, "escape_char             = {}", policy.escape_char)?;
    writeln!(out, "allow_drive_letter      = {}", policy.allow_drive_letter)?;
    writeln!(out, "allow_current_directory = {}", policy.allow_current_directory)?;
    writeln!(out, "allow_parent_directory  = {}", policy.allow_parent_directory)?;
    writeln!(out, "allow_inactivation      = {}", policy.allow_inactivation)?;
    writeln!(out, "allow_unc               = {}", policy.allow_unc)?;
    writeln!(out, "flavor                  = {}", policy.flavor)?;
    writeln!(out, "comparer                = {}", settings.comparer)?;
    writeln!(out, "include_hidden          = {}", settings.include_hidden)?;
    Ok(())
}

pub fn handle_path(out: &mut impl Write, store: &SettingsStore) -> Result<()> {
    writeln!(out, "{}", store.path().display())?;
    Ok(())
}

pub fn handle_set(store: &SettingsStore, key: &str, value: &str) -> Result<Settings> {
    let mut settings = store.load().context("Failed to load settings")?;
    settings.set(key, value).with_context(|| {
        format!("Known settings: {}", Settings::KEYS.join(", "))
    })?;
    store.save(&settings).context("Failed to save settings")?;
    Ok(settings)
}

pub fn handle_reset(store: &SettingsStore) -> Result<()> {
    store.reset().context("Failed to reset settings")
}
