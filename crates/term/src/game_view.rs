//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a status line, the bordered play field whose last
//! inner row is the danger line, and the input prompt.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::GameStatus;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const CALM: Rgb = Rgb::new(120, 220, 140);
const WARN: Rgb = Rgb::new(240, 200, 80);
const DANGER: Rgb = Rgb::new(240, 80, 80);
const FIELD_BG: Rgb = Rgb::new(20, 20, 30);

const LABEL: CellStyle = CellStyle::plain(Rgb::new(220, 220, 220)).bold();
const VALUE: CellStyle = CellStyle::plain(Rgb::new(200, 200, 200));
const BORDER: CellStyle = CellStyle::plain(Rgb::new(150, 150, 160));

/// Terminal renderer for the word field.
pub struct GameView {
    /// Widest play field, in columns, including the border.
    max_field_w: u16,
    hp_bar_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            max_field_w: 72,
            hp_bar_w: 20,
        }
    }
}

impl GameView {
    pub fn new(max_field_w: u16, hp_bar_w: u16) -> Self {
        Self {
            max_field_w,
            hp_bar_w,
        }
    }

    pub fn render(&self, snap: &GameSnapshot, typed: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, typed, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        typed: &str,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        if fb.width() != viewport.width || fb.height() != viewport.height {
            fb.resize(viewport.width, viewport.height);
        }
        fb.clear(CellStyle::default().cell(' '));

        if viewport.width < 20 || viewport.height < 8 {
            fb.put_str(0, 0, "terminal too small", LABEL);
            return;
        }

        let field_w = viewport.width.min(self.max_field_w);
        let field_x = (viewport.width - field_w) / 2;
        let field_y = 1;
        // Status line above, prompt below.
        let field_h = viewport.height - 2;

        self.draw_status(fb, snap, field_x, field_w);

        let inner_x = field_x + 1;
        let inner_y = field_y + 1;
        let inner_w = field_w - 2;
        let inner_h = field_h - 2;
        fb.fill_rect(inner_x, inner_y, inner_w, inner_h, ' ', CellStyle::default().on(FIELD_BG));
        draw_border(fb, field_x, field_y, field_w, field_h);

        let danger_y = inner_y + inner_h - 1;
        fb.hline(inner_x, danger_y, inner_w, '─', CellStyle::plain(DANGER).on(FIELD_BG).dim());

        if snap.playable() || snap.status.is_terminal() {
            self.draw_words(fb, snap, typed, inner_x, inner_y, inner_w, inner_h);
        }

        match snap.status {
            GameStatus::Idle => self.draw_overlay(
                fb,
                field_x,
                field_y,
                field_w,
                field_h,
                "TYPEFALL",
                "type the falling words - Enter to start",
            ),
            GameStatus::Victory => {
                let line = format!(
                    "cleared in {} - Enter to play again",
                    format_elapsed(snap.completion_ms.unwrap_or(snap.elapsed_ms))
                );
                self.draw_overlay(fb, field_x, field_y, field_w, field_h, "VICTORY", &line);
            }
            GameStatus::GameOver => {
                let line = format!(
                    "{} words typed - Enter to try again",
                    snap.words_matched
                );
                self.draw_overlay(fb, field_x, field_y, field_w, field_h, "GAME OVER", &line);
            }
            GameStatus::Running => {}
        }

        let prompt_y = field_y + field_h;
        let x = fb.put_str(field_x, prompt_y, "> ", LABEL);
        let x = fb.put_str(x, prompt_y, typed, VALUE.bold());
        if snap.playable() {
            fb.put_char(x, prompt_y, '_', VALUE.dim());
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, w: u16) {
        let mut cx = fb.put_str(x, 0, "HP ", LABEL);

        let filled = (snap.hp_fraction() * self.hp_bar_w as f32).round() as u16;
        let bar = CellStyle::plain(health_color(snap.hp_fraction()));
        for i in 0..self.hp_bar_w {
            let ch = if i < filled { '█' } else { '·' };
            fb.put_char(cx + i, 0, ch, if i < filled { bar } else { VALUE.dim() });
        }
        cx += self.hp_bar_w + 1;
        cx = fb.put_str(cx, 0, &format!("{:>3}/{}", snap.hp, snap.max_hp), VALUE);

        let right = format!(
            "LEVEL {}/{}  LEFT {}  {}",
            snap.level_number,
            snap.level_count,
            snap.words_remaining + snap.words.len(),
            format_elapsed(snap.elapsed_ms)
        );
        let right_len = right.chars().count() as u16;
        let right_x = (x + w).saturating_sub(right_len);
        if right_x > cx {
            fb.put_str(right_x, 0, &right, VALUE);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_words(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        typed: &str,
        inner_x: u16,
        inner_y: u16,
        inner_w: u16,
        inner_h: u16,
    ) {
        let typed = typed.trim().to_lowercase();
        // Rows above the danger line.
        let travel = inner_h.saturating_sub(1);

        for word in snap.words.iter() {
            let len = word.text.chars().count() as u16;
            let span = inner_w.saturating_sub(len);
            let x = inner_x + (word.x_fraction.clamp(0.0, 1.0) * span as f32).round() as u16;
            let y = inner_y + (word.progress.clamp(0.0, 1.0) * travel as f32).floor() as u16;
            let y = y.min(inner_y + travel.saturating_sub(1));

            let color = if word.progress < 0.5 {
                CALM.lerp(WARN, word.progress * 2.0)
            } else {
                WARN.lerp(DANGER, (word.progress - 0.5) * 2.0)
            };
            let base = CellStyle::plain(color).on(FIELD_BG);
            let matched = if !typed.is_empty() && word.text.starts_with(&typed) {
                typed.chars().count()
            } else {
                0
            };

            for (i, ch) in word.text.chars().enumerate() {
                let style = if i < matched {
                    CellStyle::plain(Rgb::new(255, 255, 255)).on(FIELD_BG).bold()
                } else {
                    base
                };
                fb.put_char(x + i as u16, y, ch, style);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        title: &str,
        line: &str,
    ) {
        let mid = y + h / 2;
        let style = CellStyle::plain(Rgb::new(255, 255, 255)).on(FIELD_BG);
        fb.put_str_centered(x, w, mid.saturating_sub(1), title, style.bold());
        fb.put_str_centered(x, w, mid + 1, line, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x + w - 1;
    let bottom = y + h - 1;
    fb.hline(x + 1, y, w - 2, '─', BORDER);
    fb.hline(x + 1, bottom, w - 2, '─', BORDER);
    for yy in y + 1..bottom {
        fb.put_char(x, yy, '│', BORDER);
        fb.put_char(right, yy, '│', BORDER);
    }
    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(right, y, '┐', BORDER);
    fb.put_char(x, bottom, '└', BORDER);
    fb.put_char(right, bottom, '┘', BORDER);
}

fn health_color(fraction: f32) -> Rgb {
    if fraction > 0.5 {
        WARN.lerp(CALM, (fraction - 0.5) * 2.0)
    } else {
        DANGER.lerp(WARN, fraction * 2.0)
    }
}

/// `m:ss.t` for a millisecond duration.
pub fn format_elapsed(ms: u64) -> String {
    let tenths = (ms / 100) % 10;
    let secs = (ms / 1000) % 60;
    let mins = ms / 60_000;
    format!("{mins}:{secs:02}.{tenths}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordSnapshot;

    fn running(words: &[(&str, f32, f32)]) -> GameSnapshot {
        let mut snap = GameSnapshot {
            status: GameStatus::Running,
            hp: 70,
            max_hp: 100,
            level_number: 2,
            level_count: 5,
            words_remaining: 12,
            elapsed_ms: 65_400,
            ..GameSnapshot::default()
        };
        for &(text, x_fraction, progress) in words {
            snap.words.push(WordSnapshot {
                text: text.into(),
                x_fraction,
                progress,
            });
        }
        snap
    }

    fn screen(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn row_of(fb: &FrameBuffer, needle: &str) -> Option<u16> {
        (0..fb.height()).find(|&y| fb.row_text(y).contains(needle))
    }

    #[test]
    fn format_elapsed_minutes_seconds_tenths() {
        assert_eq!(format_elapsed(0), "0:00.0");
        assert_eq!(format_elapsed(65_400), "1:05.4");
        assert_eq!(format_elapsed(3_599_999), "59:59.9");
    }

    #[test]
    fn status_line_shows_hp_and_level() {
        let fb = GameView::default().render(&running(&[]), "", Viewport::new(80, 24));
        let status = fb.row_text(0);
        assert!(status.starts_with("HP "));
        assert!(status.contains(" 70/100"));
        assert!(status.contains("LEVEL 2/5"));
        assert!(status.contains("LEFT 12"));
        assert!(status.contains("1:05.4"));
    }

    #[test]
    fn words_fall_with_progress() {
        let snap = running(&[("cat", 0.5, 0.0), ("dog", 0.5, 0.9)]);
        let fb = GameView::default().render(&snap, "", Viewport::new(80, 24));
        let cat = row_of(&fb, "cat").unwrap();
        let dog = row_of(&fb, "dog").unwrap();
        assert_eq!(cat, 2);
        assert!(dog > cat);
    }

    #[test]
    fn words_stay_above_danger_line() {
        let snap = running(&[("edge", 0.9, 1.0)]);
        let fb = GameView::default().render(&snap, "", Viewport::new(80, 24));
        // Rows 1 and 22 are the border, row 21 the danger line.
        assert!(fb.row_text(21).contains("──────"));
        assert_eq!(row_of(&fb, "edge"), Some(20));
    }

    #[test]
    fn words_stay_inside_field_horizontally() {
        let snap = running(&[("wonderful", 1.0, 0.2), ("lighthouse", 0.0, 0.4)]);
        let fb = GameView::default().render(&snap, "", Viewport::new(40, 20));
        for y in 0..fb.height() {
            let row = fb.row_text(y);
            if let Some(pos) = row.find("wonderful") {
                let col = row[..pos].chars().count();
                assert!(col >= 1 && col + 9 < row.chars().count());
            }
        }
        assert!(row_of(&fb, "wonderful").is_some());
        assert!(row_of(&fb, "lighthouse").is_some());
    }

    #[test]
    fn prompt_shows_typed_text() {
        let fb = GameView::default().render(&running(&[]), "ca", Viewport::new(80, 24));
        assert!(fb.row_text(23).contains("> ca_"));
    }

    #[test]
    fn typed_prefix_is_highlighted() {
        let snap = running(&[("cat", 0.5, 0.0)]);
        let fb = GameView::default().render(&snap, "Ca", Viewport::new(80, 24));
        let y = row_of(&fb, "cat").unwrap();
        let x = fb.row_text(y).find("cat").unwrap();
        let x = fb.row_text(y)[..x].chars().count() as u16;
        assert!(fb.get(x, y).unwrap().style.bold);
        assert!(fb.get(x + 1, y).unwrap().style.bold);
        assert!(!fb.get(x + 2, y).unwrap().style.bold);
    }

    #[test]
    fn idle_shows_title() {
        let fb = GameView::default().render(&GameSnapshot::default(), "", Viewport::new(80, 24));
        assert!(screen(&fb).contains("TYPEFALL"));
        assert!(screen(&fb).contains("Enter to start"));
    }

    #[test]
    fn victory_shows_completion_time() {
        let snap = GameSnapshot {
            status: GameStatus::Victory,
            hp: 40,
            max_hp: 100,
            elapsed_ms: 42_000,
            completion_ms: Some(42_000),
            ..GameSnapshot::default()
        };
        let fb = GameView::default().render(&snap, "", Viewport::new(80, 24));
        let text = screen(&fb);
        assert!(text.contains("VICTORY"));
        assert!(text.contains("0:42.0"));
    }

    #[test]
    fn game_over_shows_overlay() {
        let snap = GameSnapshot {
            status: GameStatus::GameOver,
            max_hp: 100,
            words_matched: 17,
            ..GameSnapshot::default()
        };
        let fb = GameView::default().render(&snap, "", Viewport::new(80, 24));
        let text = screen(&fb);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("17 words typed"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = running(&[("cat", 0.5, 0.5)]);
        for (w, h) in [(0, 0), (1, 1), (19, 7), (20, 8), (21, 9)] {
            let fb = GameView::default().render(&snap, "cat", Viewport::new(w, h));
            assert_eq!(fb.width(), w);
            assert_eq!(fb.height(), h);
        }
    }

    #[test]
    fn render_into_reuses_buffer() {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(10, 10);
        view.render_into(&running(&[]), "", Viewport::new(80, 24), &mut fb);
        assert_eq!((fb.width(), fb.height()), (80, 24));
        assert_eq!(fb, view.render(&running(&[]), "", Viewport::new(80, 24)));
    }
}
