// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Native digit shaping for numbers shown in Persian and Arabic text.

use crate::language::Language;

const PERSIAN_ZERO: u32 = '۰' as u32;
const ARABIC_ZERO: u32 = '٠' as u32;

/// Replace ASCII digits with the digit set of `language`.
///
/// Persian uses Extended Arabic-Indic digits (`۰۱۲…`), Arabic uses
/// Arabic-Indic digits (`٠١٢…`). English text is returned unchanged.
pub fn localize_digits(language: Language, text: &str) -> String {
	let zero = match language {
		Language::En => return text.to_string(),
		Language::Fa => PERSIAN_ZERO,
		Language::Ar => ARABIC_ZERO,
	};

	text
		.chars()
		.map(|c| match c.to_digit(10) {
			Some(d) if c.is_ascii_digit() => char::from_u32(zero + d).unwrap_or(c),
			_ => c,
		})
		.collect()
}

/// Replace Persian and Arabic-Indic digits with ASCII digits.
///
/// Used before parsing numbers typed on a Persian or Arabic keyboard.
pub fn normalize_digits(text: &str) -> String {
	text
		.chars()
		.map(|c| {
			let code = c as u32;
			let offset = if (PERSIAN_ZERO..PERSIAN_ZERO + 10).contains(&code) {
				Some(code - PERSIAN_ZERO)
			} else if (ARABIC_ZERO..ARABIC_ZERO + 10).contains(&code) {
				Some(code - ARABIC_ZERO)
			} else {
				None
			};
			offset
				.and_then(|d| char::from_digit(d, 10))
				.unwrap_or(c)
		})
		.collect()
}
