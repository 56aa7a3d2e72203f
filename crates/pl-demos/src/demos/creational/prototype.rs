//! Prototype: new machines cloned from a pre-configured template.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::Rng;

use crate::demos::Demo;
use crate::domain::{Control, DemoInput, InputOutcome};

const CONTROLS: &[Control] = &[Control::new("c", "Instant Clone")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VmKind {
    Template,
    Clone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualMachine {
    pub name: String,
    pub kind: VmKind,
    pub pid: u16,
    pub image: &'static str,
    pub packages: Vec<&'static str>,
}

impl VirtualMachine {
    fn base_image() -> Self {
        Self {
            name: "Ubuntu_Base_Img".to_string(),
            kind: VmKind::Template,
            pid: 1,
            image: "ubuntu-22.04",
            packages: vec!["openssh-server", "nginx", "docker"],
        }
    }

    pub fn is_running(&self) -> bool {
        self.kind == VmKind::Clone
    }
}

#[derive(Debug)]
pub struct PrototypeDemo {
    machines: Vec<VirtualMachine>,
    rng: StdRng,
}

impl PrototypeDemo {
    pub fn new(rng: StdRng) -> Self {
        Self {
            machines: vec![VirtualMachine::base_image()],
            rng,
        }
    }

    /// Copy the template and boot the copy.
    pub fn clone_template(&mut self) -> &VirtualMachine {
        let mut vm = self.machines[0].clone();
        vm.name = format!("Clone_{}", self.rng.gen_range(0..999));
        vm.kind = VmKind::Clone;
        vm.pid = self.rng.gen_range(1000..10_000);
        self.machines.push(vm);
        &self.machines[self.machines.len() - 1]
    }

    /// The template, always first.
    pub fn template(&self) -> &VirtualMachine {
        &self.machines[0]
    }

    /// Template followed by every clone in creation order.
    pub fn machines(&self) -> &[VirtualMachine] {
        &self.machines
    }
}

impl Demo for PrototypeDemo {
    fn handle(&mut self, input: DemoInput, _now: Instant) -> InputOutcome {
        match input {
            DemoInput::Key('c') => {
                self.clone_template();
                InputOutcome::Consumed
            }
            _ => InputOutcome::Ignored,
        }
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Click 'Instant Clone' on the Template"
    }
}
