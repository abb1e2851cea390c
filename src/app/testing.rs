use std::{cell::RefCell, collections::HashMap, collections::VecDeque};

use anyhow::{Result, bail};

use super::console::Console;
use crate::core::git::ConfigBackend;

/// Console fed from a fixed list of answers; records everything shown.
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
    hidden_prompts: usize,
}

impl ScriptedConsole {
    pub fn new(input: &[&str]) -> Self {
        Self {
            input: input.iter().map(ToString::to_string).collect(),
            output: Vec::new(),
            hidden_prompts: 0,
        }
    }

    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    pub const fn hidden_prompts(&self) -> usize {
        self.hidden_prompts
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) -> Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        self.output.push(prompt.to_string());
        Ok(self.input.pop_front())
    }

    fn prompt_hidden(&mut self, prompt: &str) -> Result<Option<String>> {
        self.hidden_prompts += 1;
        self.prompt(prompt)
    }
}

/// In-memory local config.
#[derive(Default)]
pub struct MemoryBackend {
    values: RefCell<HashMap<String, String>>,
    writes: RefCell<Vec<(String, String)>>,
    fail_writes: bool,
}

impl MemoryBackend {
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.borrow().clone()
    }
}

impl ConfigBackend for MemoryBackend {
    fn read_config(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write_config(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            bail!("could not lock config file");
        }
        self.writes
            .borrow_mut()
            .push((key.to_string(), value.to_string()));
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
