//! Bridge to the external Graphviz programs.
//!
//! The [`Renderer`] stages a [`StyleStore`] into temporary files and issues the
//! command lines that display it or export it as an image. What the external
//! programs do with those files is not inspected: a missing executable or a
//! failed render is logged and otherwise ignored.
//!
//! Two engines are supported. [`Engine::Dot`] hands the document straight to
//! the viewer or exporter. [`Engine::Neato`] first runs the layout engine to
//! position the graph and then hands the positioned document on.
//!
//! The staging files are fixed per configuration, so one renderer must not be
//! used from several threads at once.

use crate::config::RendererConfig;
use crate::error::{DotError, Result};
use crate::store::StyleStore;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;
use tracing::{debug, warn};

/// Which program lays out the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Render directly with `dot`.
    #[default]
    Dot,
    /// Position with `neato` first.
    Neato,
}

impl Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Engine::Dot => f.write_str("dot"),
            Engine::Neato => f.write_str("neato"),
        }
    }
}

impl FromStr for Engine {
    type Err = DotError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dot" => Ok(Engine::Dot),
            "neato" => Ok(Engine::Neato),
            other => Err(DotError::UnknownEngine(other.to_string())),
        }
    }
}

/// A program name and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs external commands on behalf of the [`Renderer`].
pub trait CommandRunner {
    /// Run `invocation` to completion. Failures are the runner's business.
    fn run(&mut self, invocation: &Invocation);
}

impl<F> CommandRunner for F
where
    F: FnMut(&Invocation),
{
    fn run(&mut self, invocation: &Invocation) {
        self(invocation)
    }
}

/// Spawns real processes and waits for them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) {
        debug!(command = %invocation, "running external renderer");
        match Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
        {
            Ok(status) if status.success() => {}
            Ok(status) => warn!(
                command = %invocation,
                status = %status,
                "external renderer exited unsuccessfully"
            ),
            Err(e) => warn!(
                command = %invocation,
                error = %e,
                "failed to spawn external renderer"
            ),
        }
    }
}

/// Displays or exports a [`StyleStore`] through Graphviz.
#[derive(Debug, Clone, Default)]
pub struct Renderer<R = SystemRunner> {
    config: RendererConfig,
    runner: R,
}

impl Renderer<SystemRunner> {
    /// Create a renderer that spawns real processes.
    pub fn new(config: RendererConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: CommandRunner> Renderer<R> {
    /// Create a renderer that issues its commands through `runner`.
    pub fn with_runner(config: RendererConfig, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn into_runner(self) -> R {
        self.runner
    }

    /// Open the graph in the interactive viewer.
    pub fn display<N: Display>(&mut self, store: &StyleStore<N>, engine: Engine) -> Result<()> {
        self.stage(store, engine)?;

        let view = Invocation::new(&self.config.dotty, [path_arg(&self.config.temp_dot)]);
        self.runner.run(&view);
        Ok(())
    }

    /// Export the graph as `<output_base>.<format>` and return that path.
    pub fn render_to_image<N: Display>(
        &mut self,
        store: &StyleStore<N>,
        output_base: impl AsRef<Path>,
        format: &str,
        engine: Engine,
    ) -> Result<PathBuf> {
        self.stage(store, engine)?;

        let output = image_path(output_base.as_ref(), format);
        let program = match engine {
            Engine::Dot => &self.config.dot,
            Engine::Neato => &self.config.neato,
        };
        let export = Invocation::new(
            program,
            [
                format!("-T{}", format),
                path_arg(&self.config.temp_dot),
                "-o".to_string(),
                path_arg(&output),
            ],
        );
        self.runner.run(&export);
        Ok(output)
    }

    /// Leave a document ready for the viewer or exporter at `temp_dot`.
    fn stage<N: Display>(&mut self, store: &StyleStore<N>, engine: Engine) -> Result<()> {
        match engine {
            Engine::Dot => store.save_to_file(&self.config.temp_dot),
            Engine::Neato => {
                store.save_to_file(&self.config.temp_neo)?;
                let layout = Invocation::new(
                    &self.config.neato,
                    [
                        "-o".to_string(),
                        path_arg(&self.config.temp_dot),
                        path_arg(&self.config.temp_neo),
                    ],
                );
                self.runner.run(&layout);
                Ok(())
            }
        }
    }
}

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}

fn image_path(base: &Path, format: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(".");
    name.push(format);
    PathBuf::from(name)
}
