//! Dependency checking and bootstrap for the external tools.
//!
//! An ffmpeg already on PATH is always preferred. Only when `ffmpeg -version`
//! fails is the package manager consulted, and only once: after the install the
//! version probe must succeed or the run stops.

use crate::config::ExternalTools;
use crate::error::{CoreError, CoreResult, command_failed_error};
use crate::util::{Deadline, is_command_available, run_with_deadline};

use log::{debug, info, warn};
use std::process::{Command, Stdio};
use std::time::Duration;

const FFMPEG_VERSION_ARG: &str = "-version";

/// Ensures ffmpeg can be executed, installing it through the package manager if needed.
///
/// `install_timeout` bounds the install step; it is further bounded by `deadline`.
///
/// # Errors
///
/// * `DependencyUnavailable` - ffmpeg and the package manager are both missing
/// * `InstallTimedOut` - the install did not finish in time
/// * `InstallFailed` - the install command failed to start or exited non-zero
/// * `NotOnPath` - the install succeeded but ffmpeg still cannot be executed
pub fn ensure_available(
    tools: &ExternalTools,
    install_timeout: Duration,
    deadline: &Deadline,
) -> CoreResult<()> {
    if is_command_available(&tools.ffmpeg, FFMPEG_VERSION_ARG) {
        debug!("ffmpeg is available at {}", tools.ffmpeg.display());
        warn_if_probe_missing(tools);
        return Ok(());
    }

    let manager = &tools.package_manager;
    let manual_command = manager.install_command_line();
    warn!("ffmpeg not found. Attempting automatic installation...");

    if !is_command_available(&manager.program, &manager.version_arg) {
        return Err(CoreError::DependencyUnavailable(format!(
            "ffmpeg was not found and {program} is not available.\n\
             Install {program}: {setup}\n\
             Then install ffmpeg: {manual_command}",
            program = manager.program.display(),
            setup = manager.setup_command,
        )));
    }

    info!("Found {}. Installing {}...", manager.program.display(), manager.package);
    info!("This may take several minutes...");

    let install_deadline = deadline.nested(install_timeout);
    let mut cmd = Command::new(&manager.program);
    cmd.args(&manager.install_args)
        .arg(&manager.package)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let install_failed = |source: CoreError| CoreError::InstallFailed {
        package: manager.package.clone(),
        manual_command: manual_command.clone(),
        source: Box::new(source),
    };

    match run_with_deadline(&mut cmd, &install_deadline) {
        Ok(status) if status.success() => {}
        Ok(status) => {
            return Err(install_failed(command_failed_error(
                manual_command.clone(),
                status,
                "see installer output above",
            )));
        }
        Err(CoreError::CommandTimeout { .. }) => {
            return Err(CoreError::InstallTimedOut {
                package: manager.package.clone(),
                after: install_deadline.budget(),
                manual_command: manual_command.clone(),
            });
        }
        Err(e) => return Err(install_failed(e)),
    }

    info!("{} installed successfully", manager.package);

    if !is_command_available(&tools.ffmpeg, FFMPEG_VERSION_ARG) {
        return Err(CoreError::NotOnPath(format!(
            "{} was installed but ffmpeg is not available on PATH. \
             Restart the terminal or run: {}",
            manager.package, manager.path_hint
        )));
    }

    warn_if_probe_missing(tools);
    Ok(())
}

// ffprobe ships with ffmpeg; without it only the inspection steps degrade.
fn warn_if_probe_missing(tools: &ExternalTools) {
    if !is_command_available(&tools.ffprobe, FFMPEG_VERSION_ARG) {
        warn!(
            "ffprobe not found at {}; metadata inspection will fail for every file",
            tools.ffprobe.display()
        );
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::PackageManager;
    use std::path::PathBuf;

    const MISSING: &str = "surely-not-a-real-program-42";

    fn tools(ffmpeg: &str, manager: &str) -> ExternalTools {
        ExternalTools {
            ffmpeg: PathBuf::from(ffmpeg),
            ffprobe: PathBuf::from("true"),
            package_manager: PackageManager {
                program: PathBuf::from(manager),
                ..PackageManager::homebrew()
            },
        }
    }

    fn deadline() -> Deadline {
        Deadline::after(Duration::from_secs(30))
    }

    #[test]
    fn test_present_ffmpeg_skips_install() {
        // The package manager would fail, proving it is never consulted.
        let result = ensure_available(&tools("true", MISSING), Duration::from_secs(5), &deadline());
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_package_manager_gives_manual_instructions() {
        let err = ensure_available(&tools(MISSING, MISSING), Duration::from_secs(5), &deadline())
            .unwrap_err();
        assert!(matches!(err, CoreError::DependencyUnavailable(_)));
        let msg = err.to_string();
        assert!(msg.contains("install ffmpeg"));
        assert!(msg.contains("Homebrew/install/HEAD/install.sh"));
    }

    #[test]
    fn test_failed_install_is_wrapped_with_hint() {
        // `sh /dev/null` exits 0, then `sh -c "exit 1" ffmpeg` fails.
        let mut tools = tools(MISSING, "sh");
        tools.package_manager.version_arg = "/dev/null".to_string();
        tools.package_manager.install_args = vec!["-c".to_string(), "exit 1".to_string()];
        let err = ensure_available(&tools, Duration::from_secs(5), &deadline()).unwrap_err();
        match &err {
            CoreError::InstallFailed { manual_command, .. } => {
                assert!(manual_command.ends_with("ffmpeg"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_successful_install_without_binary_is_not_on_path() {
        let mut tools = tools(MISSING, "true");
        tools.package_manager.install_args.clear();
        let err = ensure_available(&tools, Duration::from_secs(5), &deadline()).unwrap_err();
        assert!(matches!(err, CoreError::NotOnPath(_)));
        assert!(err.to_string().contains("PATH"));
    }

    #[test]
    fn test_install_timeout() {
        let mut tools = tools(MISSING, "sleep");
        tools.package_manager.version_arg = "0".to_string();
        tools.package_manager.install_args.clear();
        tools.package_manager.package = "5".to_string();
        let err = ensure_available(&tools, Duration::from_millis(200), &deadline()).unwrap_err();
        assert!(matches!(err, CoreError::InstallTimedOut { .. }));
    }
}
