//! Narration of matched words.
//!
//! Narration is fire-and-forget. A narrator may fail (no speech synthesizer,
//! too many utterances queued); callers log the error and carry on.

use std::process::{Child, Command, Stdio};

use anyhow::{bail, Context, Result};

/// Utterances allowed to run at once before new ones are refused.
const MAX_PENDING: usize = 4;

pub trait Narrator {
    fn announce(&mut self, text: &str) -> Result<()>;
}

impl<N: Narrator + ?Sized> Narrator for Box<N> {
    fn announce(&mut self, text: &str) -> Result<()> {
        (**self).announce(text)
    }
}

/// Says nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Narrator for Silent {
    fn announce(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }
}

/// Speaks through an external program such as `espeak` or `say`, one child
/// process per word.
#[derive(Debug)]
pub struct CommandNarrator {
    program: String,
    args: Vec<String>,
    running: Vec<Child>,
}

impl CommandNarrator {
    /// `argv[0]` is the program; `None` for an empty command line.
    pub fn new(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
            running: Vec::new(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn pending(&mut self) -> usize {
        self.reap();
        self.running.len()
    }

    fn reap(&mut self) {
        self.running
            .retain_mut(|child| matches!(child.try_wait(), Ok(None)));
    }
}

impl Narrator for CommandNarrator {
    fn announce(&mut self, text: &str) -> Result<()> {
        self.reap();
        if self.running.len() >= MAX_PENDING {
            bail!("{} utterances still playing", self.running.len());
        }

        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("spawn narrator '{}'", self.program))?;
        self.running.push(child);
        Ok(())
    }
}

impl Drop for CommandNarrator {
    fn drop(&mut self) {
        for child in self.running.iter_mut() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

/// The narrator for a configured command line, or [`Silent`].
pub fn from_command(argv: Option<&[String]>) -> Box<dyn Narrator> {
    match argv.and_then(CommandNarrator::new) {
        Some(n) => {
            log::info!("narration via '{}'", n.program());
            Box::new(n)
        }
        None => Box::new(Silent),
    }
}
