//! Console Driver
//!
//! Ties together the escape parser, the screen buffer manager and the
//! cursor. Bytes go in one at a time through [`Console::process`]; they are
//! either drawn, interpreted as line controls, or routed to the escape
//! parser.

use std::fmt;
use std::io;

use crate::config::ConsoleConfig;
use crate::core::{
    apply_sgr, Attribute, Cursor, DisplaySurface, Font, Frame, Glyph, Overflow, Screen,
    ScrollFill, Snapshot,
};
use crate::parser::{Action, Parser, ESC};

/// A character console drawing into a display surface
#[derive(Debug)]
pub struct Console<'f, S> {
    /// Bitmap and attribute planes
    screen: Screen<S>,
    /// Escape sequence parser
    parser: Parser,
    /// Glyph table
    font: &'f Font,
    cursor: Cursor,
    /// Attribute for the next glyph
    attribute: Attribute,
    /// Bottom row treatment after a scroll
    scroll_fill: ScrollFill,
    /// Cursor visibility restored by `clear`
    cursor_on_clear: bool,
    /// Scrolls since the last clear
    scroll_count: u64,
}

impl<S: DisplaySurface> Console<'static, S> {
    /// Create a console with the built-in font and default settings.
    ///
    /// The surface is left untouched; call [`Console::clear`] to initialise
    /// it.
    pub fn new(surface: S) -> Self {
        Console::with_font(surface, Font::builtin())
    }
}

impl<'f, S: DisplaySurface> Console<'f, S> {
    /// Create a console drawing with `font`
    pub fn with_font(surface: S, font: &'f Font) -> Self {
        Self::with_config(surface, font, &ConsoleConfig::default())
    }

    /// Create a console with explicit settings. `config.font_path` is not
    /// read here; load the font first and pass it in.
    pub fn with_config(surface: S, font: &'f Font, config: &ConsoleConfig) -> Self {
        Self {
            screen: Screen::new(surface),
            parser: Parser::new(),
            font,
            cursor: Cursor {
                visible: config.cursor_visible,
                ..Cursor::default()
            },
            attribute: Attribute::DEFAULT,
            scroll_fill: config.scroll_fill,
            cursor_on_clear: config.cursor_visible,
            scroll_count: 0,
        }
    }

    /// Clear the screen and reset every piece of console state.
    ///
    /// The bitmap is zeroed, all attributes become the default, the cursor
    /// goes home and the parser drops any partial sequence.
    pub fn clear(&mut self) {
        self.screen.clear(Attribute::DEFAULT);

        self.cursor = Cursor {
            visible: self.cursor_on_clear,
            ..Cursor::default()
        };
        self.attribute = Attribute::DEFAULT;
        self.parser.reset();
        self.scroll_count = 0;

        if self.cursor.visible {
            self.screen.paint_cursor(0, 0, self.attribute);
        }
        log::debug!("Console cleared");
    }

    /// Process one byte of output
    pub fn process(&mut self, byte: u8) {
        if self.parser.is_active() {
            if let Some(action) = self.parser.advance(byte) {
                self.apply_action(action);
            }
            return;
        }

        // Clear the indicator in case the cursor moves
        self.screen
            .erase_cursor(self.cursor.col, self.cursor.row, self.attribute);

        match byte {
            b'\n' => self.cursor.newline(),
            b'\r' => self.cursor.carriage_return(),
            ESC => self.parser.begin(),
            _ => {
                self.screen
                    .render_glyph(self.font, byte, self.cursor.col, self.cursor.row);
                self.cursor.advance();
            }
        }

        if self.cursor.normalize() == Overflow::Scroll {
            self.scroll();
        }

        if self.cursor.visible {
            self.screen
                .paint_cursor(self.cursor.col, self.cursor.row, self.attribute);
        }
    }

    /// Process a chunk of bytes in order
    pub fn feed(&mut self, data: &[u8]) {
        for &byte in data {
            self.process(byte);
        }
    }

    /// Show or hide the flashing cursor indicator
    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor.visible = visible;
        let (col, row) = (self.cursor.col, self.cursor.row);
        if visible {
            self.screen.paint_cursor(col, row, self.attribute);
        } else {
            self.screen.erase_cursor(col, row, self.attribute);
        }
    }

    fn apply_action(&mut self, action: Action) {
        match action {
            Action::Sgr(code) => {
                self.attribute = apply_sgr(code, self.attribute);
            }
            Action::Invalid(byte) => {
                log::debug!("Discarding escape sequence at byte {:#04x}", byte);
            }
        }
    }

    fn scroll(&mut self) {
        self.screen.scroll_up(self.scroll_fill, self.attribute);
        self.scroll_count += 1;
        log::trace!("Scrolled display ({} since clear)", self.scroll_count);
    }

    /// Current cursor state
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Attribute applied to the next glyph
    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    /// Whether an escape sequence is being collected
    pub fn in_escape(&self) -> bool {
        self.parser.is_active()
    }

    /// Number of times the display scrolled since the last clear
    pub fn scroll_count(&self) -> u64 {
        self.scroll_count
    }

    pub fn font(&self) -> &'f Font {
        self.font
    }

    pub fn screen(&self) -> &Screen<S> {
        &self.screen
    }

    pub fn surface(&self) -> &S {
        self.screen.surface()
    }

    /// Give back the surface, consuming the console
    pub fn into_surface(self) -> S {
        self.screen.into_surface()
    }

    /// Pixel rows of cell `(x, y)`
    pub fn glyph_at(&self, x: usize, y: usize) -> Glyph {
        self.screen.glyph_at(x, y)
    }

    /// Attribute byte of cell `(x, y)`, including any cursor flash bit
    pub fn attribute_at(&self, x: usize, y: usize) -> Attribute {
        self.screen.attribute_at(x, y)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.screen, &self.cursor, self.attribute, self.scroll_count)
    }

    /// Rasterise the display
    pub fn frame(&self, flash_phase: bool) -> Frame {
        Frame::render(self.screen.surface(), flash_phase)
    }
}

impl<S: DisplaySurface> fmt::Write for Console<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.feed(s.as_bytes());
        Ok(())
    }
}

impl<S: DisplaySurface> io::Write for Console<'_, S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.feed(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::{HEIGHT, WIDTH};
    use crate::core::{Color, MemorySurface};
    use proptest::prelude::*;

    fn console() -> Console<'static, MemorySurface> {
        let mut console = Console::new(MemorySurface::new());
        console.clear();
        console
    }

    fn at(console: &Console<'_, MemorySurface>) -> (usize, usize) {
        (console.cursor().col, console.cursor().row)
    }

    #[test]
    fn test_clear_state() {
        let mut console = console();
        console.feed(b"\x1b[31mjunk\n\x1b[");
        console.clear();

        assert_eq!(at(&console), (0, 0));
        assert_eq!(console.attribute(), Attribute::DEFAULT);
        assert!(console.cursor().visible);
        assert!(!console.in_escape());
        assert!(console.surface().bitmap().iter().all(|&b| b == 0));
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let expected = if (x, y) == (0, 0) { 0x38 | 0x80 } else { 0x38 };
                assert_eq!(console.attribute_at(x, y).bits(), expected, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_print_advances_and_moves_indicator() {
        let mut console = console();
        console.process(b'A');
        assert_eq!(at(&console), (1, 0));
        assert_eq!(&console.glyph_at(0, 0), Font::builtin().glyph(b'A'));
        assert_eq!(console.attribute_at(0, 0), Attribute::DEFAULT);
        assert!(console.attribute_at(1, 0).is_flash());
    }

    #[test]
    fn test_sgr_then_print() {
        let mut console = console();
        console.feed(b"\x1b[31mA");
        assert_eq!(console.attribute().ink(), Color::Red);
        assert_eq!(&console.glyph_at(0, 0), Font::builtin().glyph(b'A'));
        assert_eq!(console.attribute_at(0, 0).ink(), Color::Red);
        assert_eq!(at(&console), (1, 0));
    }

    #[test]
    fn test_escape_bytes_are_not_drawn() {
        let mut console = console();
        console.feed(b"\x1b[44m");
        assert_eq!(at(&console), (0, 0));
        assert!(console.surface().bitmap().iter().all(|&b| b == 0));
        assert_eq!(console.attribute().paper(), Color::Blue);
    }

    #[test]
    fn test_aborted_escape_then_normal_input() {
        let mut console = console();
        console.feed(b"\x1bX");
        assert_eq!(at(&console), (0, 0));
        assert_eq!(console.attribute(), Attribute::DEFAULT);
        assert!(console.surface().bitmap().iter().all(|&b| b == 0));

        console.process(b'B');
        assert_eq!(at(&console), (1, 0));
        assert_eq!(&console.glyph_at(0, 0), Font::builtin().glyph(b'B'));
    }

    #[test]
    fn test_oversized_sgr_code_is_ignored() {
        let mut console = console();
        console.feed(b"\x1b[");
        console.feed(&vec![b'9'; 100_000]);
        assert!(console.in_escape());
        console.feed(b"mZ");

        assert!(!console.in_escape());
        assert_eq!(console.attribute(), Attribute::DEFAULT);
        assert_eq!(at(&console), (1, 0));
        assert_eq!(&console.glyph_at(0, 0), Font::builtin().glyph(b'Z'));
    }

    #[test]
    fn test_newline_and_carriage_return() {
        let mut console = console();
        console.feed(b"abc\n");
        assert_eq!(at(&console), (0, 1));
        console.feed(b"de\r");
        assert_eq!(at(&console), (0, 1));
        assert_eq!(&console.glyph_at(1, 1), Font::builtin().glyph(b'e'));
    }

    #[test]
    fn test_wrap_to_next_row() {
        let mut console = console();
        console.feed(&[b'x'; WIDTH]);
        assert_eq!(at(&console), (0, 1));
        assert_eq!(console.scroll_count(), 0);
        console.process(b'y');
        assert_eq!(&console.glyph_at(0, 1), Font::builtin().glyph(b'y'));
    }

    #[test]
    fn test_full_screen_scrolls_once() {
        let mut console = console();
        console.feed(&vec![b'#'; WIDTH * HEIGHT]);
        assert_eq!(console.scroll_count(), 1);
        assert_eq!(at(&console), (0, HEIGHT - 1));
    }

    #[test]
    fn test_scroll_discards_top_row() {
        let mut console = console();
        for y in 0..HEIGHT {
            let c = b'A' + y as u8;
            console.feed(&[c; WIDTH]);
        }
        assert_eq!(console.scroll_count(), 1);
        // Row 0 now holds what row 1 held
        assert_eq!(&console.glyph_at(0, 0), Font::builtin().glyph(b'B'));
        assert_eq!(&console.glyph_at(WIDTH - 1, HEIGHT - 2), Font::builtin().glyph(b'X'));
    }

    #[test]
    fn test_newline_on_bottom_row_scrolls() {
        let mut console = console();
        console.feed(&[b'\n'; HEIGHT - 1]);
        assert_eq!(console.scroll_count(), 0);
        console.feed(b"Z\n");
        assert_eq!(console.scroll_count(), 1);
        assert_eq!(at(&console), (0, HEIGHT - 1));
        assert_eq!(&console.glyph_at(0, HEIGHT - 2), Font::builtin().glyph(b'Z'));
    }

    #[test]
    fn test_scroll_fill_clear() {
        let config = ConsoleConfig {
            scroll_fill: ScrollFill::Clear,
            ..Default::default()
        };
        let mut console = Console::with_config(MemorySurface::new(), Font::builtin(), &config);
        console.clear();
        console.feed(&[b'\n'; HEIGHT - 1]);
        console.feed(b"Z\n");
        assert_eq!(console.glyph_at(0, HEIGHT - 1), [0; 8]);
    }

    #[test]
    fn test_cursor_visibility() {
        let mut console = console();
        console.set_cursor_visible(false);
        assert!(!console.attribute_at(0, 0).is_flash());
        console.process(b'q');
        assert!(!console.attribute_at(1, 0).is_flash());

        console.set_cursor_visible(true);
        assert!(console.attribute_at(1, 0).is_flash());
    }

    #[test]
    fn test_hidden_cursor_from_config() {
        let config = ConsoleConfig {
            cursor_visible: false,
            ..Default::default()
        };
        let mut console = Console::with_config(MemorySurface::new(), Font::builtin(), &config);
        console.clear();
        assert!(console
            .surface()
            .attributes()
            .iter()
            .all(|&a| a == Attribute::DEFAULT.bits()));
    }

    #[test]
    fn test_indicator_keeps_old_attribute_until_next_byte() {
        let mut console = console();
        console.feed(b"\x1b[32m");
        // The parser does not repaint the cursor cell
        assert_eq!(console.attribute_at(0, 0).bits(), 0x38 | 0x80);
        console.feed(b"\r");
        assert_eq!(console.attribute_at(0, 0).ink(), Color::Green);
        assert!(console.attribute_at(0, 0).is_flash());
    }

    #[test]
    fn test_fmt_write() {
        use std::fmt::Write;
        let mut console = console();
        write!(console, "{}{}", "\x1b[1m", 42).unwrap();
        assert!(console.attribute().is_bright());
        assert_eq!(&console.glyph_at(0, 0), Font::builtin().glyph(b'4'));
        assert_eq!(&console.glyph_at(1, 0), Font::builtin().glyph(b'2'));
    }

    #[test]
    fn test_io_write() {
        use std::io::Write;
        let mut console = console();
        console.write_all(b"ok\n").unwrap();
        console.flush().unwrap();
        assert_eq!(at(&console), (0, 1));
    }

    #[test]
    fn test_custom_font() {
        let mut bytes = vec![0u8; crate::core::FONT_BYTES];
        bytes[b'*' as usize * 8 + 3] = 0x18;
        let font = Font::from_bytes(&bytes).unwrap();

        let mut console = Console::with_font(MemorySurface::new(), &font);
        console.clear();
        console.process(b'*');
        assert_eq!(console.glyph_at(0, 0), [0, 0, 0, 0x18, 0, 0, 0, 0]);
    }

    proptest! {
        #[test]
        fn prop_escape_abort_leaves_state(byte in any::<u8>().prop_filter("not [", |b| *b != b'['), col in 0usize..WIDTH) {
            let mut console = console();
            console.feed(&vec![b'.'; col]);
            let before_cursor = console.cursor().clone();
            let before_attr = console.attribute();
            let before_planes = console.surface().clone();

            console.feed(&[ESC, byte]);

            prop_assert_eq!(console.cursor(), &before_cursor);
            prop_assert_eq!(console.attribute(), before_attr);
            prop_assert!(console.surface() == &before_planes);
            prop_assert!(!console.in_escape());
        }

        #[test]
        fn prop_printable_renders_font_glyph(byte in any::<u8>().prop_filter("not control", |b| ![b'\n', b'\r', ESC].contains(b))) {
            let mut console = console();
            console.process(byte);
            prop_assert_eq!(&console.glyph_at(0, 0), Font::builtin().glyph(byte));
            prop_assert_eq!(at(&console), (1, 0));
        }
    }
}
