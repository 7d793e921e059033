use super::surface::{write_pixel_rgba_clipped, Rgba};

const GLYPH_WIDTH: i32 = 3;
const GLYPH_HEIGHT: i32 = 5;
const FIRST_GLYPH: char = ' ';
const LAST_GLYPH: char = '~';

/// Builtin 3x5 bitmap font, scaled by an integer factor. This is the
/// text-rendering resource a scene acquires on enter and releases on exit;
/// construction is cheap and infallible.
#[derive(Debug, Clone, Copy)]
pub struct Font {
    scale: i32,
}

impl Font {
    pub fn new(scale: i32) -> Self {
        Self {
            scale: scale.max(1),
        }
    }

    pub fn glyph_advance(&self) -> i32 {
        (GLYPH_WIDTH + 1) * self.scale
    }

    pub fn line_advance(&self) -> i32 {
        (GLYPH_HEIGHT + 2) * self.scale
    }

    pub fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.glyph_advance()
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_text_clipped(
    frame: &mut [u8],
    width: u32,
    height: u32,
    font: &Font,
    mut x: i32,
    y: i32,
    text: &str,
    color: Rgba,
) {
    if width == 0 || height == 0 {
        return;
    }
    for ch in text.chars() {
        draw_glyph_clipped(frame, width, height, font, x, y, glyph_rows(ch), color);
        x += font.glyph_advance();
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_glyph_clipped(
    frame: &mut [u8],
    width: u32,
    height: u32,
    font: &Font,
    x: i32,
    y: i32,
    rows: [u8; GLYPH_HEIGHT as usize],
    color: Rgba,
) {
    let width_usize = width as usize;
    let height_i32 = height as i32;

    for (row_index, row_bits) in rows.iter().enumerate() {
        let glyph_y = y + row_index as i32 * font.scale;

        for col in 0..GLYPH_WIDTH {
            if (row_bits & (1 << (GLYPH_WIDTH - 1 - col))) == 0 {
                continue;
            }

            let glyph_x = x + col * font.scale;
            for sy in 0..font.scale {
                let pixel_y = glyph_y + sy;
                if pixel_y < 0 || pixel_y >= height_i32 {
                    continue;
                }
                for sx in 0..font.scale {
                    write_pixel_rgba_clipped(frame, width_usize, glyph_x + sx, pixel_y, color);
                }
            }
        }
    }
}

const BLANK: [u8; 5] = [0, 0, 0, 0, 0];

/// Row bitmaps for the printable ASCII range, most significant bit left.
/// Anything outside the range renders as a blank cell.
fn glyph_rows(ch: char) -> [u8; 5] {
    if !(FIRST_GLYPH..=LAST_GLYPH).contains(&ch) {
        return BLANK;
    }
    GLYPHS[ch as usize - FIRST_GLYPH as usize]
}

#[rustfmt::skip]
const GLYPHS: [[u8; 5]; 95] = [
    [0b000, 0b000, 0b000, 0b000, 0b000], // space
    [0b010, 0b010, 0b010, 0b000, 0b010], // !
    [0b101, 0b101, 0b000, 0b000, 0b000], // "
    [0b101, 0b111, 0b101, 0b111, 0b101], // #
    [0b111, 0b110, 0b111, 0b011, 0b111], // $
    [0b101, 0b001, 0b010, 0b100, 0b101], // %
    [0b010, 0b101, 0b010, 0b101, 0b011], // &
    [0b010, 0b010, 0b000, 0b000, 0b000], // '
    [0b001, 0b010, 0b010, 0b010, 0b001], // (
    [0b100, 0b010, 0b010, 0b010, 0b100], // )
    [0b000, 0b101, 0b010, 0b101, 0b000], // *
    [0b000, 0b010, 0b111, 0b010, 0b000], // +
    [0b000, 0b000, 0b000, 0b010, 0b100], // ,
    [0b000, 0b000, 0b111, 0b000, 0b000], // -
    [0b000, 0b000, 0b000, 0b000, 0b010], // .
    [0b001, 0b001, 0b010, 0b100, 0b100], // /
    [0b111, 0b101, 0b101, 0b101, 0b111], // 0
    [0b010, 0b110, 0b010, 0b010, 0b111], // 1
    [0b111, 0b001, 0b111, 0b100, 0b111], // 2
    [0b111, 0b001, 0b111, 0b001, 0b111], // 3
    [0b101, 0b101, 0b111, 0b001, 0b001], // 4
    [0b111, 0b100, 0b111, 0b001, 0b111], // 5
    [0b111, 0b100, 0b111, 0b101, 0b111], // 6
    [0b111, 0b001, 0b010, 0b010, 0b010], // 7
    [0b111, 0b101, 0b111, 0b101, 0b111], // 8
    [0b111, 0b101, 0b111, 0b001, 0b111], // 9
    [0b000, 0b010, 0b000, 0b010, 0b000], // :
    [0b000, 0b010, 0b000, 0b010, 0b100], // ;
    [0b001, 0b010, 0b100, 0b010, 0b001], // <
    [0b000, 0b111, 0b000, 0b111, 0b000], // =
    [0b100, 0b010, 0b001, 0b010, 0b100], // >
    [0b111, 0b001, 0b011, 0b000, 0b010], // ?
    [0b111, 0b101, 0b111, 0b100, 0b111], // @
    [0b010, 0b101, 0b111, 0b101, 0b101], // A
    [0b110, 0b101, 0b110, 0b101, 0b110], // B
    [0b111, 0b100, 0b100, 0b100, 0b111], // C
    [0b110, 0b101, 0b101, 0b101, 0b110], // D
    [0b111, 0b100, 0b110, 0b100, 0b111], // E
    [0b111, 0b100, 0b110, 0b100, 0b100], // F
    [0b111, 0b100, 0b101, 0b101, 0b111], // G
    [0b101, 0b101, 0b111, 0b101, 0b101], // H
    [0b111, 0b010, 0b010, 0b010, 0b111], // I
    [0b111, 0b001, 0b001, 0b101, 0b111], // J
    [0b101, 0b101, 0b110, 0b101, 0b101], // K
    [0b100, 0b100, 0b100, 0b100, 0b111], // L
    [0b101, 0b111, 0b111, 0b101, 0b101], // M
    [0b101, 0b111, 0b111, 0b111, 0b101], // N
    [0b111, 0b101, 0b101, 0b101, 0b111], // O
    [0b110, 0b101, 0b110, 0b100, 0b100], // P
    [0b111, 0b101, 0b101, 0b111, 0b001], // Q
    [0b110, 0b101, 0b110, 0b101, 0b101], // R
    [0b111, 0b100, 0b111, 0b001, 0b111], // S
    [0b111, 0b010, 0b010, 0b010, 0b010], // T
    [0b101, 0b101, 0b101, 0b101, 0b111], // U
    [0b101, 0b101, 0b101, 0b101, 0b010], // V
    [0b101, 0b101, 0b111, 0b111, 0b101], // W
    [0b101, 0b101, 0b010, 0b101, 0b101], // X
    [0b101, 0b101, 0b010, 0b010, 0b010], // Y
    [0b111, 0b001, 0b010, 0b100, 0b111], // Z
    [0b110, 0b100, 0b100, 0b100, 0b110], // [
    [0b100, 0b100, 0b010, 0b001, 0b001], // backslash
    [0b011, 0b001, 0b001, 0b001, 0b011], // ]
    [0b010, 0b101, 0b000, 0b000, 0b000], // ^
    [0b000, 0b000, 0b000, 0b000, 0b111], // _
    [0b100, 0b010, 0b000, 0b000, 0b000], // `
    [0b000, 0b111, 0b001, 0b111, 0b111], // a
    [0b100, 0b100, 0b110, 0b101, 0b110], // b
    [0b000, 0b111, 0b100, 0b100, 0b111], // c
    [0b001, 0b001, 0b111, 0b101, 0b111], // d
    [0b000, 0b111, 0b110, 0b100, 0b111], // e
    [0b011, 0b100, 0b110, 0b100, 0b100], // f
    [0b000, 0b111, 0b101, 0b111, 0b001], // g
    [0b100, 0b100, 0b110, 0b101, 0b101], // h
    [0b010, 0b000, 0b010, 0b010, 0b010], // i
    [0b001, 0b000, 0b001, 0b101, 0b010], // j
    [0b100, 0b101, 0b110, 0b101, 0b101], // k
    [0b100, 0b100, 0b100, 0b100, 0b111], // l
    [0b000, 0b110, 0b111, 0b101, 0b101], // m
    [0b000, 0b110, 0b101, 0b101, 0b101], // n
    [0b000, 0b111, 0b101, 0b101, 0b111], // o
    [0b000, 0b110, 0b101, 0b110, 0b100], // p
    [0b000, 0b111, 0b101, 0b111, 0b001], // q
    [0b000, 0b110, 0b101, 0b100, 0b100], // r
    [0b000, 0b111, 0b110, 0b001, 0b111], // s
    [0b010, 0b111, 0b010, 0b010, 0b011], // t
    [0b000, 0b101, 0b101, 0b101, 0b111], // u
    [0b000, 0b101, 0b101, 0b101, 0b010], // v
    [0b000, 0b101, 0b101, 0b111, 0b010], // w
    [0b000, 0b101, 0b010, 0b010, 0b101], // x
    [0b000, 0b101, 0b101, 0b111, 0b001], // y
    [0b000, 0b111, 0b001, 0b010, 0b111], // z
    [0b011, 0b010, 0b110, 0b010, 0b011], // {
    [0b010, 0b010, 0b010, 0b010, 0b010], // |
    [0b110, 0b010, 0b011, 0b010, 0b110], // }
    [0b000, 0b011, 0b110, 0b000, 0b000], // ~
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_table_covers_printable_ascii() {
        assert_eq!(
            GLYPHS.len(),
            (LAST_GLYPH as usize - FIRST_GLYPH as usize) + 1
        );
        assert_eq!(glyph_rows(' '), BLANK);
        assert_ne!(glyph_rows('H'), BLANK);
        assert_ne!(glyph_rows('5'), BLANK);
    }

    #[test]
    fn unknown_characters_fall_back_to_blank() {
        assert_eq!(glyph_rows('\n'), BLANK);
        assert_eq!(glyph_rows('é'), BLANK);
    }

    #[test]
    fn font_metrics_scale_linearly() {
        let font = Font::new(2);
        assert_eq!(font.glyph_advance(), 8);
        assert_eq!(font.line_advance(), 14);
        assert_eq!(font.text_width("HP: 5"), 40);
    }

    #[test]
    fn zero_scale_is_clamped_to_one() {
        let font = Font::new(0);
        assert_eq!(font.glyph_advance(), 4);
    }

    #[test]
    fn draw_text_sets_pixels_and_clips_at_edges() {
        let width = 16u32;
        let height = 8u32;
        let mut frame = vec![0u8; (width * height * 4) as usize];
        let font = Font::new(1);
        let color = [255, 255, 255, 255];

        draw_text_clipped(&mut frame, width, height, &font, 0, 0, "I", color);
        // Top row of 'I' is fully lit.
        for x in 0..3 {
            let offset = (x * 4) as usize;
            assert_eq!(frame[offset], 255, "pixel {x} should be lit");
        }

        // Clipping outside the buffer must not panic or write.
        let before = frame.clone();
        draw_text_clipped(&mut frame, width, height, &font, -50, -50, "X", color);
        draw_text_clipped(&mut frame, width, height, &font, 100, 100, "X", color);
        assert_eq!(frame, before);
    }
}
