//! Command: reversible bank transactions.

use std::time::Instant;

use crate::demos::Demo;
use crate::domain::{Control, DemoInput, InputOutcome};

pub const OPENING_BALANCE: i64 = 1000;

const CONTROLS: &[Control] = &[
    Control::new("d", "+ $100"),
    Control::new("w", "- $50"),
    Control::new("u", "Undo"),
];

/// Receiver of the commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    balance: i64,
}

impl Account {
    pub fn new(balance: i64) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }
}

/// A transaction that knows how to apply and revert itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxCommand {
    Deposit(i64),
    Withdraw(i64),
}

impl TxCommand {
    fn delta(self) -> i64 {
        match self {
            TxCommand::Deposit(amount) => amount,
            TxCommand::Withdraw(amount) => -amount,
        }
    }

    pub fn execute(self, account: &mut Account) {
        account.balance += self.delta();
    }

    pub fn undo(self, account: &mut Account) {
        account.balance -= self.delta();
    }

    pub fn label(self) -> &'static str {
        match self {
            TxCommand::Deposit(_) => "Deposit",
            TxCommand::Withdraw(_) => "Withdraw",
        }
    }

    /// Signed amount as shown in the log, e.g. `+100` or `-50`.
    pub fn signed_amount(self) -> String {
        format!("{:+}", self.delta())
    }
}

#[derive(Debug)]
pub struct CommandDemo {
    account: Account,
    history: Vec<TxCommand>,
}

impl Default for CommandDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandDemo {
    pub fn new() -> Self {
        Self {
            account: Account::new(OPENING_BALANCE),
            history: Vec::new(),
        }
    }

    pub fn run(&mut self, command: TxCommand) {
        command.execute(&mut self.account);
        self.history.push(command);
    }

    /// Revert the most recent command. Returns `None` on empty history.
    pub fn undo(&mut self) -> Option<TxCommand> {
        let command = self.history.pop()?;
        command.undo(&mut self.account);
        Some(command)
    }

    pub fn balance(&self) -> i64 {
        self.account.balance()
    }

    pub fn history(&self) -> &[TxCommand] {
        &self.history
    }
}

impl Demo for CommandDemo {
    fn handle(&mut self, input: DemoInput, _now: Instant) -> InputOutcome {
        match input {
            DemoInput::Key('d') => self.run(TxCommand::Deposit(100)),
            DemoInput::Key('w') => self.run(TxCommand::Withdraw(50)),
            DemoInput::Key('u') => {
                self.undo();
            }
            _ => return InputOutcome::Ignored,
        }
        InputOutcome::Consumed
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Make transactions, then click Undo to revert"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_and_undo_restore_balance() {
        let now = Instant::now();
        let mut demo = CommandDemo::new();
        demo.handle(DemoInput::Key('d'), now);
        demo.handle(DemoInput::Key('w'), now);
        demo.handle(DemoInput::Key('d'), now);
        assert_eq!(demo.balance(), 1150);
        assert_eq!(demo.history().len(), 3);

        demo.handle(DemoInput::Key('u'), now);
        assert_eq!(demo.balance(), 1050);
        demo.handle(DemoInput::Key('u'), now);
        demo.handle(DemoInput::Key('u'), now);
        assert_eq!(demo.balance(), OPENING_BALANCE);
        assert!(demo.history().is_empty());
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut demo = CommandDemo::new();
        assert_eq!(demo.undo(), None);
        assert_eq!(demo.balance(), OPENING_BALANCE);
    }

    #[test]
    fn test_log_labels() {
        assert_eq!(TxCommand::Deposit(100).signed_amount(), "+100");
        assert_eq!(TxCommand::Withdraw(50).signed_amount(), "-50");
        assert_eq!(TxCommand::Withdraw(50).label(), "Withdraw");
    }
}
