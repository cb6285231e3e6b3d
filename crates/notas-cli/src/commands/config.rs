use notas_core::config::normalize_base_url;

use crate::cli::ConfigCommands;
use crate::config_profiles::CliProfilesConfig;
use crate::error::CliError;

pub fn run_config(command: ConfigCommands, global_profile: Option<&str>) -> Result<(), CliError> {
    match command {
        ConfigCommands::Init {
            url,
            timeout_secs,
            no_activate,
        } => run_config_init(global_profile, &url, timeout_secs, no_activate),
        ConfigCommands::Show => run_config_show(global_profile),
    }
}

pub fn run_config_init(
    profile_name: Option<&str>,
    url: &str,
    timeout_secs: Option<u64>,
    no_activate: bool,
) -> Result<(), CliError> {
    let api_base_url = normalize_base_url(url)?;
    if timeout_secs == Some(0) {
        return Err(CliError::Config(
            "Request timeout must be at least one second".to_string(),
        ));
    }

    let mut config = CliProfilesConfig::load().map_err(CliError::Config)?;
    let profile_name = config.resolve_profile_name(profile_name);
    let profile = config.profile_mut_or_default(&profile_name);
    profile.api_base_url = Some(api_base_url);
    if timeout_secs.is_some() {
        profile.request_timeout_secs = timeout_secs;
    }

    if !no_activate || config.active_profile.is_none() {
        config.active_profile = Some(profile_name.clone());
    }

    let path = config.save().map_err(CliError::Config)?;
    tracing::debug!("Saved profile '{}' to {}", profile_name, path.display());
    println!("Saved profile '{profile_name}' to {}", path.display());
    Ok(())
}

pub fn run_config_show(profile_name: Option<&str>) -> Result<(), CliError> {
    let config = CliProfilesConfig::load().map_err(CliError::Config)?;
    let profile_name = config.resolve_profile_name(profile_name);
    let Some(profile) = config.profile(&profile_name) else {
        println!(
            "Profile '{profile_name}' is not configured. Run `notas config init --url <URL>` first."
        );
        return Ok(());
    };

    println!("Profile: {profile_name}");
    println!("{}", serde_json::to_string_pretty(profile)?);
    Ok(())
}
