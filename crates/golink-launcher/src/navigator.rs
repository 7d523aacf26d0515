use async_trait::async_trait;
use golink_core::{Destination, NavigationAdapter, NavigationError, OpenMode};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;
use typed_builder::TypedBuilder;

/// Writes the destination URL to stdout instead of opening it.
///
/// Useful for piping into another program, e.g. `xdg-open "$(golink resolve docs)"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintNavigator;

#[async_trait]
impl NavigationAdapter for PrintNavigator {
    async fn navigate(
        &self,
        destination: &Destination,
        mode: OpenMode,
    ) -> Result<(), NavigationError> {
        debug!(url = %destination, mode = %mode, "printing destination");
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(format!("{destination}\n").as_bytes())
            .await
            .map_err(|e| NavigationError::Io(e.to_string()))?;
        stdout
            .flush()
            .await
            .map_err(|e| NavigationError::Io(e.to_string()))
    }
}

/// Opens destinations by running an external program with the URL as its
/// last argument, e.g. `xdg-open` or `open`.
///
/// # Example
///
/// ```rust
/// use golink_launcher::CommandNavigator;
///
/// let navigator = CommandNavigator::builder()
///     .program("firefox")
///     .foreground_args(vec!["--new-tab".to_string()])
///     .build();
/// ```
#[derive(Debug, Clone, TypedBuilder)]
pub struct CommandNavigator {
    /// Program to run.
    #[builder(setter(into))]
    program: String,

    /// Arguments passed for every mode, before the URL.
    #[builder(default)]
    args: Vec<String>,

    /// Extra arguments for [`OpenMode::OpenForeground`].
    #[builder(default)]
    foreground_args: Vec<String>,

    /// Extra arguments for [`OpenMode::OpenBackground`].
    #[builder(default)]
    background_args: Vec<String>,
}

impl CommandNavigator {
    pub fn program(&self) -> &str {
        &self.program
    }

    fn args_for(&self, mode: OpenMode) -> impl Iterator<Item = &String> {
        let extra: &[String] = match mode {
            OpenMode::ReplaceCurrent => &[],
            OpenMode::OpenForeground => &self.foreground_args,
            OpenMode::OpenBackground => &self.background_args,
        };
        self.args.iter().chain(extra)
    }
}

#[async_trait]
impl NavigationAdapter for CommandNavigator {
    async fn navigate(
        &self,
        destination: &Destination,
        mode: OpenMode,
    ) -> Result<(), NavigationError> {
        debug!(program = %self.program, url = %destination, mode = %mode, "launching opener");

        let status = Command::new(&self.program)
            .args(self.args_for(mode))
            .arg(destination.as_str())
            .status()
            .await
            .map_err(|e| NavigationError::Launch(format!("{}: {e}", self.program)))?;

        if !status.success() {
            return Err(NavigationError::Exit(format!("{} {status}", self.program)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> Destination {
        Destination::new("https://example.com").unwrap()
    }

    #[test]
    fn mode_specific_args_follow_common_args() {
        let navigator = CommandNavigator::builder()
            .program("browser")
            .args(vec!["--profile=work".to_string()])
            .foreground_args(vec!["--new-tab".to_string()])
            .background_args(vec!["--new-tab".to_string(), "--background".to_string()])
            .build();

        let collect = |mode| navigator.args_for(mode).cloned().collect::<Vec<_>>();
        assert_eq!(collect(OpenMode::ReplaceCurrent), ["--profile=work"]);
        assert_eq!(collect(OpenMode::OpenForeground), ["--profile=work", "--new-tab"]);
        assert_eq!(
            collect(OpenMode::OpenBackground),
            ["--profile=work", "--new-tab", "--background"]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn successful_opener() {
        let navigator = CommandNavigator::builder().program("true").build();
        navigator
            .navigate(&url(), OpenMode::ReplaceCurrent)
            .await
            .unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_opener_reports_exit() {
        let navigator = CommandNavigator::builder().program("false").build();
        let err = navigator
            .navigate(&url(), OpenMode::OpenBackground)
            .await
            .unwrap_err();
        assert!(matches!(err, NavigationError::Exit(_)));
    }

    #[tokio::test]
    async fn missing_opener_reports_launch_failure() {
        let navigator = CommandNavigator::builder()
            .program("golink-test-no-such-opener")
            .build();
        let err = navigator
            .navigate(&url(), OpenMode::ReplaceCurrent)
            .await
            .unwrap_err();
        assert!(matches!(err, NavigationError::Launch(_)));
    }
}
