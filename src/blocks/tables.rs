/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Literal glyph tables, one per block type, indexed by bit pattern.
//!
//! Each table has exactly `2^n` entries for its geometry's `n` bits and is
//! part of the wire format: entry `p` is the glyph for pattern `p` under the
//! canonical bit-weight layout of the geometry. Do not reorder.

/// Glyphs for single-cell blocks.
///
/// See: <https://www.amp-what.com/unicode/search/full%20block>
pub const SOLIDS: [char; 2] = [' ', '█'];

/// Glyphs for single-cell blocks using the digits `0`, `1`.
pub const BINARIES: [char; 2] = ['0', '1'];

/// Glyphs for single-cell blocks using space and `X`.
pub const XXS: [char; 2] = [' ', 'X'];

/// Glyphs for 1×2 half blocks.
///
/// See: <https://www.amp-what.com/unicode/search/half%20block>
pub const HALVES: [char; 4] = [' ', '▀', '▄', '█'];

/// ASCII-safe glyphs for 1×2 blocks.
pub const ASCIIS: [char; 4] = [' ', '^', 'v', '%'];

/// Glyphs for 2×2 quadrant blocks.
///
/// See: <https://www.amp-what.com/unicode/search/quarter%20block>
#[rustfmt::skip]
pub const QUADS: [char; 16] = [
    ' ', '▘', '▝', '▀', '▖', '▌', '▞', '▛',
    '▗', '▚', '▐', '▜', '▄', '▙', '▟', '█',
];

/// Glyphs for 2×2 blocks using separated quadrants.
///
/// See: <https://www.amp-what.com/unicode/search/quad%20separated>
#[rustfmt::skip]
pub const QUADS_SEPARATED: [char; 16] = [
    ' ', '𜰡', '𜰢', '𜰣', '𜰤', '𜰥', '𜰦', '𜰧',
    '𜰨', '𜰩', '𜰪', '𜰫', '𜰬', '𜰭', '𜰮', '𜰯',
];

/// Glyphs for 2×3 sextant blocks.
///
/// See: <https://www.amp-what.com/unicode/search/sextants>
#[rustfmt::skip]
pub const SEXTANTS: [char; 64] = [
    ' ', '🬀', '🬁', '🬂', '🬃', '🬄', '🬅', '🬆',
    '🬇', '🬈', '🬉', '🬊', '🬋', '🬌', '🬍', '🬎',
    '🬏', '🬐', '🬑', '🬒', '🬓', '▌', '🬔', '🬕',
    '🬖', '🬗', '🬘', '🬙', '🬚', '🬛', '🬜', '🬝',
    '🬞', '🬟', '🬠', '🬡', '🬢', '🬣', '🬤', '🬥',
    '🬦', '🬧', '▐', '🬨', '🬩', '🬪', '🬫', '🬬',
    '🬭', '🬮', '🬯', '🬰', '🬱', '🬲', '🬳', '🬴',
    '🬵', '🬶', '🬷', '🬸', '🬹', '🬺', '🬻', '█',
];

/// Glyphs for 2×3 blocks using separated sextants.
///
/// See: <https://www.amp-what.com/unicode/search/sextants%20separated>
#[rustfmt::skip]
pub const SEXTANTS_SEPARATED: [char; 64] = [
    ' ', '𜹑', '𜹒', '𜹓', '𜹔', '𜹕', '𜹖', '𜹗',
    '𜹘', '𜹙', '𜹚', '𜹛', '𜹜', '𜹝', '𜹞', '𜹟',
    '𜹠', '𜹡', '𜹢', '𜹣', '𜹤', '𜹥', '𜹦', '𜹧',
    '𜹨', '𜹩', '𜹪', '𜹫', '𜹬', '𜹭', '𜹮', '𜹯',
    '𜹰', '𜹱', '𜹲', '𜹳', '𜹴', '𜹵', '𜹶', '𜹷',
    '𜹸', '𜹹', '𜹺', '𜹻', '𜹼', '𜹽', '𜹾', '𜹿',
    '𜺀', '𜺁', '𜺂', '𜺃', '𜺄', '𜺅', '𜺆', '𜺇',
    '𜺈', '𜺉', '𜺊', '𜺋', '𜺌', '𜺍', '𜺎', '𜺏',
];

/// Glyphs for 2×4 octant blocks.
///
/// See: <https://www.amp-what.com/unicode/search/octants>
#[rustfmt::skip]
pub const OCTANTS: [char; 256] = [
    ' ', '𜺨', '𜺫', '🮂', '𜴀', '▘', '𜴁', '𜴂',
    '𜴃', '𜴄', '▝', '𜴅', '𜴆', '𜴇', '𜴈', '▀',
    '𜴉', '𜴊', '𜴋', '𜴌', '🯦', '𜴍', '𜴎', '𜴏',
    '𜴐', '𜴑', '𜴒', '𜴓', '𜴔', '𜴕', '𜴖', '𜴗',
    '𜴘', '𜴙', '𜴚', '𜴛', '𜴜', '𜴝', '𜴞', '𜴟',
    '🯧', '𜴠', '𜴡', '𜴢', '𜴣', '𜴤', '𜴥', '𜴦',
    '𜴧', '𜴨', '𜴩', '𜴪', '𜴫', '𜴬', '𜴭', '𜴮',
    '𜴯', '𜴰', '𜴱', '𜴲', '𜴳', '𜴴', '𜴵', '🮅',
    '𜺣', '𜴶', '𜴷', '𜴸', '𜴹', '𜴺', '𜴻', '𜴼',
    '𜴽', '𜴾', '𜴿', '𜵀', '𜵁', '𜵂', '𜵃', '𜵄',
    '▖', '𜵅', '𜵆', '𜵇', '𜵈', '▌', '𜵉', '𜵊',
    '𜵋', '𜵌', '▞', '𜵍', '𜵎', '𜵏', '𜵐', '▛',
    '𜵑', '𜵒', '𜵓', '𜵔', '𜵕', '𜵖', '𜵗', '𜵘',
    '𜵙', '𜵚', '𜵛', '𜵜', '𜵝', '𜵞', '𜵟', '𜵠',
    '𜵡', '𜵢', '𜵣', '𜵤', '𜵥', '𜵦', '𜵧', '𜵨',
    '𜵩', '𜵪', '𜵫', '𜵬', '𜵭', '𜵮', '𜵯', '𜵰',
    '𜺠', '𜵱', '𜵲', '𜵳', '𜵴', '𜵵', '𜵶', '𜵷',
    '𜵸', '𜵹', '𜵺', '𜵻', '𜵼', '𜵽', '𜵾', '𜵿',
    '𜶀', '𜶁', '𜶂', '𜶃', '𜶄', '𜶅', '𜶆', '𜶇',
    '𜶈', '𜶉', '𜶊', '𜶋', '𜶌', '𜶍', '𜶎', '𜶏',
    '▗', '𜶐', '𜶑', '𜶒', '𜶓', '▚', '𜶔', '𜶕',
    '𜶖', '𜶗', '▐', '𜶘', '𜶙', '𜶚', '𜶛', '▜',
    '𜶜', '𜶝', '𜶞', '𜶟', '𜶠', '𜶡', '𜶢', '𜶣',
    '𜶤', '𜶥', '𜶦', '𜶧', '𜶨', '𜶩', '𜶪', '𜶫',
    '▂', '𜶬', '𜶭', '𜶮', '𜶯', '𜶰', '𜶱', '𜶲',
    '𜶳', '𜶴', '𜶵', '𜶶', '𜶷', '𜶸', '𜶹', '𜶺',
    '𜶻', '𜶼', '𜶽', '𜶾', '𜶿', '𜷀', '𜷁', '𜷂',
    '𜷃', '𜷄', '𜷅', '𜷆', '𜷇', '𜷈', '𜷉', '𜷊',
    '𜷋', '𜷌', '𜷍', '𜷎', '𜷏', '𜷐', '𜷑', '𜷒',
    '𜷓', '𜷔', '𜷕', '𜷖', '𜷗', '𜷘', '𜷙', '𜷚',
    '▄', '𜷛', '𜷜', '𜷝', '𜷞', '▙', '𜷟', '𜷠',
    '𜷡', '𜷢', '▟', '𜷣', '▆', '𜷤', '𜷥', '█',
];

/// Glyphs for 2×4 blocks using braille patterns.
///
/// See: <https://www.amp-what.com/unicode/search/braille>
#[rustfmt::skip]
pub const BRAILLE: [char; 256] = [
    '⠀', '⠁', '⠈', '⠉', '⠂', '⠃', '⠊', '⠋',
    '⠐', '⠑', '⠘', '⠙', '⠒', '⠓', '⠚', '⠛',
    '⠄', '⠅', '⠌', '⠍', '⠆', '⠇', '⠎', '⠏',
    '⠔', '⠕', '⠜', '⠝', '⠖', '⠗', '⠞', '⠟',
    '⠠', '⠡', '⠨', '⠩', '⠢', '⠣', '⠪', '⠫',
    '⠰', '⠱', '⠸', '⠹', '⠲', '⠳', '⠺', '⠻',
    '⠤', '⠥', '⠬', '⠭', '⠦', '⠧', '⠮', '⠯',
    '⠴', '⠵', '⠼', '⠽', '⠶', '⠷', '⠾', '⠿',
    '⡀', '⡁', '⡈', '⡉', '⡂', '⡃', '⡊', '⡋',
    '⡐', '⡑', '⡘', '⡙', '⡒', '⡓', '⡚', '⡛',
    '⡄', '⡅', '⡌', '⡍', '⡆', '⡇', '⡎', '⡏',
    '⡔', '⡕', '⡜', '⡝', '⡖', '⡗', '⡞', '⡟',
    '⡠', '⡡', '⡨', '⡩', '⡢', '⡣', '⡪', '⡫',
    '⡰', '⡱', '⡸', '⡹', '⡲', '⡳', '⡺', '⡻',
    '⡤', '⡥', '⡬', '⡭', '⡦', '⡧', '⡮', '⡯',
    '⡴', '⡵', '⡼', '⡽', '⡶', '⡷', '⡾', '⡿',
    '⢀', '⢁', '⢈', '⢉', '⢂', '⢃', '⢊', '⢋',
    '⢐', '⢑', '⢘', '⢙', '⢒', '⢓', '⢚', '⢛',
    '⢄', '⢅', '⢌', '⢍', '⢆', '⢇', '⢎', '⢏',
    '⢔', '⢕', '⢜', '⢝', '⢖', '⢗', '⢞', '⢟',
    '⢠', '⢡', '⢨', '⢩', '⢢', '⢣', '⢪', '⢫',
    '⢰', '⢱', '⢸', '⢹', '⢲', '⢳', '⢺', '⢻',
    '⢤', '⢥', '⢬', '⢭', '⢦', '⢧', '⢮', '⢯',
    '⢴', '⢵', '⢼', '⢽', '⢶', '⢷', '⢾', '⢿',
    '⣀', '⣁', '⣈', '⣉', '⣂', '⣃', '⣊', '⣋',
    '⣐', '⣑', '⣘', '⣙', '⣒', '⣓', '⣚', '⣛',
    '⣄', '⣅', '⣌', '⣍', '⣆', '⣇', '⣎', '⣏',
    '⣔', '⣕', '⣜', '⣝', '⣖', '⣗', '⣞', '⣟',
    '⣠', '⣡', '⣨', '⣩', '⣢', '⣣', '⣪', '⣫',
    '⣰', '⣱', '⣸', '⣹', '⣲', '⣳', '⣺', '⣻',
    '⣤', '⣥', '⣬', '⣭', '⣦', '⣧', '⣮', '⣯',
    '⣴', '⣵', '⣼', '⣽', '⣶', '⣷', '⣾', '⣿',
];
