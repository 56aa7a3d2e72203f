//! Builder: a server configuration assembled part by part.

use std::time::Instant;

use crate::demos::Demo;
use crate::domain::{Control, DemoInput, InputOutcome};

/// Build id shown in the configuration header.
pub const BUILD_ID: &str = "#99A2";

const CONTROLS: &[Control] = &[
    Control::new("1/2", "CPU 4-Core / 8-Core"),
    Control::new("3/4", "RAM 16GB / 32GB"),
    Control::new("5/6", "Disk 512GB / 1TB"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cpu {
    FourCore,
    EightCore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ram {
    Gb16,
    Gb32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disk {
    Gb512,
    Tb1,
}

impl Cpu {
    pub fn option(&self) -> &'static str {
        match self {
            Cpu::FourCore => "4-Core",
            Cpu::EightCore => "8-Core",
        }
    }

    pub fn describe(&self) -> String {
        format!("{} Intel Xeon", self.option())
    }
}

impl Ram {
    pub fn option(&self) -> &'static str {
        match self {
            Ram::Gb16 => "16GB",
            Ram::Gb32 => "32GB",
        }
    }

    pub fn describe(&self) -> String {
        format!("{} DDR5 ECC", self.option())
    }
}

impl Disk {
    pub fn option(&self) -> &'static str {
        match self {
            Disk::Gb512 => "512GB",
            Disk::Tb1 => "1TB",
        }
    }

    pub fn describe(&self) -> String {
        format!("{} NVMe SSD", self.option())
    }
}

/// A fully specified server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub cpu: Cpu,
    pub ram: Ram,
    pub disk: Disk,
}

/// Step-by-step construction of a [`ServerConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfigBuilder {
    cpu: Option<Cpu>,
    ram: Option<Ram>,
    disk: Option<Disk>,
}

impl ServerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cpu(mut self, cpu: Cpu) -> Self {
        self.cpu = Some(cpu);
        self
    }

    pub fn ram(mut self, ram: Ram) -> Self {
        self.ram = Some(ram);
        self
    }

    pub fn disk(mut self, disk: Disk) -> Self {
        self.disk = Some(disk);
        self
    }

    /// The finished product, once every part is chosen.
    pub fn build(&self) -> Option<ServerConfig> {
        Some(ServerConfig {
            cpu: self.cpu?,
            ram: self.ram?,
            disk: self.disk?,
        })
    }

    pub fn selected_cpu(&self) -> Option<Cpu> {
        self.cpu
    }

    pub fn selected_ram(&self) -> Option<Ram> {
        self.ram
    }

    pub fn selected_disk(&self) -> Option<Disk> {
        self.disk
    }
}

#[derive(Debug, Default)]
pub struct BuilderDemo {
    builder: ServerConfigBuilder,
}

impl BuilderDemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder(&self) -> &ServerConfigBuilder {
        &self.builder
    }
}

impl Demo for BuilderDemo {
    fn handle(&mut self, input: DemoInput, _now: Instant) -> InputOutcome {
        let builder = std::mem::take(&mut self.builder);
        self.builder = match input {
            DemoInput::Key('1') => builder.cpu(Cpu::FourCore),
            DemoInput::Key('2') => builder.cpu(Cpu::EightCore),
            DemoInput::Key('3') => builder.ram(Ram::Gb16),
            DemoInput::Key('4') => builder.ram(Ram::Gb32),
            DemoInput::Key('5') => builder.disk(Disk::Gb512),
            DemoInput::Key('6') => builder.disk(Disk::Tb1),
            _ => {
                self.builder = builder;
                return InputOutcome::Ignored;
            }
        };
        InputOutcome::Consumed
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Select components to assemble server"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_builder_does_not_build() {
        let builder = ServerConfigBuilder::new().cpu(Cpu::EightCore).ram(Ram::Gb32);
        assert_eq!(builder.build(), None);
    }

    #[test]
    fn test_complete_builder_builds() {
        let config = ServerConfigBuilder::new()
            .disk(Disk::Tb1)
            .cpu(Cpu::FourCore)
            .ram(Ram::Gb16)
            .build()
            .unwrap();
        assert_eq!(config.cpu.describe(), "4-Core Intel Xeon");
        assert_eq!(config.ram.describe(), "16GB DDR5 ECC");
        assert_eq!(config.disk.describe(), "1TB NVMe SSD");
    }

    #[test]
    fn test_keys_choose_and_replace_parts() {
        let mut demo = BuilderDemo::new();
        let now = Instant::now();
        for key in ['1', '4', '5', '2'] {
            assert!(demo.handle(DemoInput::Key(key), now).is_consumed());
        }

        assert_eq!(demo.builder().selected_cpu(), Some(Cpu::EightCore));
        assert_eq!(demo.builder().selected_ram(), Some(Ram::Gb32));
        assert_eq!(demo.builder().selected_disk(), Some(Disk::Gb512));
    }

    #[test]
    fn test_unbound_key_keeps_selection() {
        let mut demo = BuilderDemo::new();
        let now = Instant::now();
        demo.handle(DemoInput::Key('6'), now);
        assert_eq!(demo.handle(DemoInput::Key('9'), now), InputOutcome::Ignored);
        assert_eq!(demo.builder().selected_disk(), Some(Disk::Tb1));
    }
}
