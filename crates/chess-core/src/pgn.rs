//! PGN export for LiveChessCloud games.
//!
//! Raw move tokens look like `"Nf3 5395+12"`: the SAN move, then optionally the
//! clock left after the move and, after `+`, the seconds spent on it.

use crate::game_data::{Game, Pairing, Player, Tournament};

/// Which timing annotations to emit inside move comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatFlags {
    pub include_emt: bool,
    pub include_clk_attr: bool,
    pub include_clk_comment: bool,
}

impl Default for FormatFlags {
    /// Everything on.
    fn default() -> Self {
        Self {
            include_emt: true,
            include_clk_attr: true,
            include_clk_comment: true,
        }
    }
}

impl FormatFlags {
    pub const NONE: FormatFlags = FormatFlags {
        include_emt: false,
        include_clk_attr: false,
        include_clk_comment: false,
    };
}

/// One decoded move token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedMove<'a> {
    pub san: &'a str,
    /// Seconds left on the mover's clock.
    pub clock: Option<u64>,
    /// Seconds spent on this move.
    pub elapsed: Option<u64>,
}

impl<'a> AnnotatedMove<'a> {
    pub fn decode(token: &'a str) -> Self {
        let mut parts = token.split(' ');
        let san = parts.next().unwrap_or_default();
        let timing = parts.next().unwrap_or_default();

        let (clock, elapsed) = match timing.split_once('+') {
            Some((clock, elapsed)) => {
                // a second '+' is ignored along with whatever follows it
                let elapsed = elapsed.split('+').next().unwrap_or_default();
                (parse_seconds(clock), parse_seconds(elapsed))
            }
            None => (parse_seconds(timing), None),
        };

        Self { san, clock, elapsed }
    }

    /// Contents of the `{...}` comment, or `None` when nothing is emitted.
    pub fn comment(&self, flags: FormatFlags) -> Option<String> {
        let mut comment = String::new();
        if let (true, Some(emt)) = (flags.include_emt, self.elapsed) {
            comment.push_str(&format!("[%emt {}]", format_hms(emt)));
        }
        if let (true, Some(clk)) = (flags.include_clk_attr, self.clock) {
            comment.push_str(&format!("[%clk {}]", format_hms(clk)));
        }
        if let (true, Some(clk)) = (flags.include_clk_comment, self.clock) {
            comment.push_str(&format_hms(clk));
        }
        (!comment.is_empty()).then_some(comment)
    }
}

fn parse_seconds(field: &str) -> Option<u64> {
    field.parse().ok()
}

/// `H:MM:SS`, hours unpadded.
pub fn format_hms(total: u64) -> String {
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}

/// Numbered movetext, without the trailing result token.
pub fn format_moves(moves: &[String], flags: FormatFlags) -> String {
    let mut out = String::new();

    for (i, token) in moves.iter().enumerate() {
        if i % 2 == 0 {
            out.push_str(&format!("{}. ", i / 2 + 1));
        }

        let mv = AnnotatedMove::decode(token);
        out.push_str(mv.san);
        if let Some(comment) = mv.comment(flags) {
            out.push_str(&format!(" {{{comment}}}"));
        }
        out.push(' ');
    }

    out.trim_end().to_string()
}

/// `"Last, First Middle"`; `?` when neither first nor last name is known.
pub fn full_name(player: &Player) -> String {
    let last = player.lname.as_deref().unwrap_or_default();
    let first = player.fname.as_deref().unwrap_or_default();
    let middle = player
        .mname
        .as_deref()
        .filter(|m| !m.is_empty())
        .map(|m| format!(" {m}"))
        .unwrap_or_default();

    let full = format!("{last}, {first}{middle}");
    let trimmed = full.trim();
    if trimmed == "," {
        "?".to_string()
    } else {
        full.trim_end().to_string()
    }
}

/// `2024-03-09` → `2024.03.09`.
pub fn pgn_date(date: &str) -> String {
    date.replace('-', ".")
}

fn escape_tag(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn or_unknown(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("?")
}

/// Render one game as a PGN block: tag pairs, a blank line, then movetext
/// ending in the result. No trailing newline.
pub fn transcribe_game(
    tournament: &Tournament,
    pairing: &Pairing,
    game: &Game,
    round: u32,
    date: Option<&str>,
    flags: FormatFlags,
) -> String {
    let result = game.result.as_pgn();
    let date = date
        .filter(|d| !d.is_empty())
        .map(pgn_date)
        .unwrap_or_else(|| "?".to_string());

    let tags = [
        ("Event", or_unknown(tournament.name.as_deref()).to_string()),
        ("Site", or_unknown(tournament.location.as_deref()).to_string()),
        ("Date", date),
        ("Round", round.to_string()),
        ("White", full_name(&pairing.white)),
        ("Black", full_name(&pairing.black)),
        ("Result", result.to_string()),
        ("PlyCount", game.moves.len().to_string()),
    ];

    let header: Vec<String> = tags
        .iter()
        .map(|(tag, value)| format!("[{tag} \"{}\"]", escape_tag(value)))
        .collect();

    format!(
        "{}\n\n{} {}",
        header.join("\n"),
        format_moves(&game.moves, flags),
        result
    )
}
