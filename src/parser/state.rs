//! Parser State Machine
//!
//! Recognises the only escape form the console supports:
//!
//! ```text
//! ESC [ <decimal digits> m
//! ```
//!
//! States:
//! - Ground: not inside a sequence; the console handles bytes itself
//! - Escape: ESC seen, waiting for `[`
//! - CsiParam: accumulating the decimal code until `m`
//!
//! Any unexpected byte abandons the sequence and returns to Ground. The
//! console enters the Escape state itself when it sees ESC in Ground, so
//! the parser only ever sees the bytes that follow it.

use super::action::Action;

/// Escape introducer
pub const ESC: u8 = 0x1B;

/// Parser state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ground,
    Escape,
    CsiParam,
}

/// The escape sequence parser
#[derive(Debug)]
pub struct Parser {
    state: State,
    /// Decimal code accumulated so far
    code: u32,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a new parser in the ground state
    pub fn new() -> Self {
        Self {
            state: State::Ground,
            code: 0,
        }
    }

    /// Reset the parser to the ground state, dropping any partial sequence
    pub fn reset(&mut self) {
        self.state = State::Ground;
        self.code = 0;
    }

    /// Called when ESC is seen in the ground state
    pub fn begin(&mut self) {
        self.reset();
        self.state = State::Escape;
    }

    /// Whether a sequence is in progress. While it is, every byte must be
    /// routed to [`Parser::advance`] instead of being drawn.
    pub fn is_active(&self) -> bool {
        self.state != State::Ground
    }

    /// Feed one byte of an escape sequence.
    ///
    /// Returns an action when the sequence ends, successfully or not.
    /// Bytes fed in the ground state are ignored.
    pub fn advance(&mut self, byte: u8) -> Option<Action> {
        match self.state {
            State::Ground => None,
            State::Escape => self.process_escape(byte),
            State::CsiParam => self.process_csi_param(byte),
        }
    }

    /// Process a byte directly after ESC
    fn process_escape(&mut self, byte: u8) -> Option<Action> {
        match byte {
            b'[' => {
                self.code = 0;
                self.state = State::CsiParam;
                None
            }
            _ => self.abort(byte),
        }
    }

    /// Process a byte of the SGR parameter
    fn process_csi_param(&mut self, byte: u8) -> Option<Action> {
        match byte {
            b'0'..=b'9' => {
                self.code = self
                    .code
                    .saturating_mul(10)
                    .saturating_add((byte - b'0') as u32);
                None
            }
            b'm' => {
                let code = self.code;
                self.reset();
                Some(Action::Sgr(code))
            }
            _ => self.abort(byte),
        }
    }

    fn abort(&mut self, byte: u8) -> Option<Action> {
        self.reset();
        Some(Action::Invalid(byte))
    }
}
