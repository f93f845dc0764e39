use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use crate::terminal_event::TerminalEvent;
use crate::ui::span::SpanLine;
use crate::ui::style::Color;
use crossterm::event::{Event, KeyEventKind, poll, read};
use crossterm::style::{
    Attribute, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{cursor, execute, terminal};
use std::io::{self, Stdout, Write};
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

/// Thin crossterm wrapper rendering inline (no alternate screen), so the
/// booking confirmation printed after exit stays in the scrollback.
pub struct Terminal {
    stdout: Stdout,
    size: Size,
    origin: Pos,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let stdout = io::stdout();
        let (width, height) = terminal::size()?;
        let (x, y) = cursor::position()?;
        Ok(Self {
            stdout,
            size: Size { width, height },
            origin: Pos { x, y },
        })
    }

    pub fn enter_raw_mode(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    pub fn exit_raw_mode(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }

    pub fn set_line_wrap(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            execute!(self.stdout, terminal::EnableLineWrap)?;
        } else {
            execute!(self.stdout, terminal::DisableLineWrap)?;
        }
        Ok(())
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn refresh_size(&mut self) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        self.size = Size { width, height };
        Ok(())
    }

    pub fn poll(&self, timeout: Duration) -> io::Result<bool> {
        poll(timeout)
    }

    pub fn read_event(&mut self) -> io::Result<TerminalEvent> {
        loop {
            match read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    return Ok(TerminalEvent::Key(map_key_event(key)));
                }
                Event::Resize(width, height) => {
                    self.size = Size { width, height };
                    return Ok(TerminalEvent::Resize { width, height });
                }
                _ => continue,
            }
        }
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(self.stdout, cursor::Hide)?;
        Ok(())
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        execute!(self.stdout, cursor::Show)?;
        Ok(())
    }

    pub fn move_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        execute!(self.stdout, cursor::MoveTo(x, y))?;
        Ok(())
    }

    /// Redraw the whole frame starting at the origin captured on startup,
    /// scrolling first if the frame would run past the bottom of the screen.
    pub fn draw_frame(&mut self, lines: &[SpanLine]) -> io::Result<()> {
        let needed = lines.len() as u16;
        if self.origin.y + needed > self.size.height {
            let overshoot = self.origin.y + needed - self.size.height;
            execute!(self.stdout, terminal::ScrollUp(overshoot))?;
            self.origin.y = self.origin.y.saturating_sub(overshoot);
        }

        execute!(self.stdout, cursor::MoveTo(self.origin.x, self.origin.y))?;
        execute!(
            self.stdout,
            terminal::Clear(terminal::ClearType::FromCursorDown)
        )?;

        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                write!(self.stdout, "\r\n")?;
            }
            self.render_line(line)?;
        }
        self.flush()
    }

    pub fn place_cursor(&mut self, col: u16, row: u16) -> io::Result<()> {
        let x = self.origin.x.saturating_add(col);
        let y = self.origin.y.saturating_add(row);
        self.move_cursor(x, y)
    }

    /// Park the cursor on the line after the frame so post-exit output
    /// starts below the wizard.
    pub fn finish_below(&mut self, frame_height: u16) -> io::Result<()> {
        let y = (self.origin.y + frame_height).min(self.size.height.saturating_sub(1));
        self.move_cursor(0, y)?;
        write!(self.stdout, "\r\n")?;
        self.flush()
    }

    fn render_line(&mut self, line: &SpanLine) -> io::Result<()> {
        for span in line {
            let styled = !span.style.is_plain();

            if let Some(fg) = span.style.color {
                write!(self.stdout, "{}", SetForegroundColor(map_color(fg)))?;
            }
            if let Some(bg) = span.style.background {
                write!(self.stdout, "{}", SetBackgroundColor(map_color(bg)))?;
            }
            if span.style.bold {
                write!(self.stdout, "{}", SetAttribute(Attribute::Bold))?;
            }
            if span.style.dim {
                write!(self.stdout, "{}", SetAttribute(Attribute::Dim))?;
            }
            if span.style.underline {
                write!(self.stdout, "{}", SetAttribute(Attribute::Underlined))?;
            }
            if span.style.reverse {
                write!(self.stdout, "{}", SetAttribute(Attribute::Reverse))?;
            }

            write!(self.stdout, "{}", span.text)?;

            if styled {
                write!(self.stdout, "{}", SetAttribute(Attribute::Reset))?;
                write!(self.stdout, "{}", ResetColor)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

fn map_color(color: Color) -> crossterm::style::Color {
    match color {
        Color::Black => crossterm::style::Color::Black,
        Color::DarkGrey => crossterm::style::Color::DarkGrey,
        Color::Red => crossterm::style::Color::Red,
        Color::Green => crossterm::style::Color::Green,
        Color::Yellow => crossterm::style::Color::Yellow,
        Color::Blue => crossterm::style::Color::Blue,
        Color::Magenta => crossterm::style::Color::Magenta,
        Color::Cyan => crossterm::style::Color::Cyan,
        Color::White => crossterm::style::Color::White,
    }
}

fn map_key_event(event: crossterm::event::KeyEvent) -> KeyEvent {
    KeyEvent {
        code: map_key_code(event.code),
        modifiers: map_key_modifiers(event.modifiers),
    }
}

fn map_key_code(code: crossterm::event::KeyCode) -> KeyCode {
    match code {
        crossterm::event::KeyCode::Char(ch) => KeyCode::Char(ch),
        crossterm::event::KeyCode::Backspace => KeyCode::Backspace,
        crossterm::event::KeyCode::Enter => KeyCode::Enter,
        crossterm::event::KeyCode::Esc => KeyCode::Esc,
        crossterm::event::KeyCode::Left => KeyCode::Left,
        crossterm::event::KeyCode::Right => KeyCode::Right,
        crossterm::event::KeyCode::Up => KeyCode::Up,
        crossterm::event::KeyCode::Down => KeyCode::Down,
        crossterm::event::KeyCode::Home => KeyCode::Home,
        crossterm::event::KeyCode::End => KeyCode::End,
        crossterm::event::KeyCode::PageUp => KeyCode::PageUp,
        crossterm::event::KeyCode::PageDown => KeyCode::PageDown,
        crossterm::event::KeyCode::Tab => KeyCode::Tab,
        crossterm::event::KeyCode::BackTab => KeyCode::BackTab,
        crossterm::event::KeyCode::Delete => KeyCode::Delete,
        _ => KeyCode::Other,
    }
}

fn map_key_modifiers(modifiers: crossterm::event::KeyModifiers) -> KeyModifiers {
    let mut mapped = KeyModifiers::NONE;
    if modifiers.contains(crossterm::event::KeyModifiers::SHIFT) {
        mapped |= KeyModifiers::SHIFT;
    }
    if modifiers.contains(crossterm::event::KeyModifiers::CONTROL) {
        mapped |= KeyModifiers::CONTROL;
    }
    if modifiers.contains(crossterm::event::KeyModifiers::ALT) {
        mapped |= KeyModifiers::ALT;
    }
    mapped
}
