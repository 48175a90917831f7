//! stylize - print text with ANSI styles
//!
//! ```text
//! stylize --bold --fg coral hello world
//! stylize --stylesheet theme.yaml --style error --underline "disk full"
//! stylize --rainbow --per-line "$(cat banner.txt)"
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use console::Term;
use styled_terminal::{presets, Color, Style, Styles};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    /// Style only when stdout supports colors
    Auto,
    Always,
    Never,
}

/// Print text with ANSI styles.
///
/// Modifier flags are merged over the stylesheet style when both are given.
#[derive(Debug, Parser)]
#[command(name = "stylize", version)]
struct Cli {
    /// Text to print; multiple arguments are joined with spaces
    #[arg(required = true, value_name = "TEXT")]
    text: Vec<String>,

    #[arg(long, conflicts_with = "light")]
    bold: bool,

    /// Faint text
    #[arg(long)]
    light: bool,

    #[arg(long)]
    italic: bool,

    #[arg(long)]
    underline: bool,

    #[arg(long)]
    strikethrough: bool,

    /// Swap foreground and background
    #[arg(long)]
    invert: bool,

    #[arg(long)]
    hidden: bool,

    /// Foreground color: name, palette index, #hex, rgb(..) or hsl(..)
    #[arg(long, value_name = "COLOR")]
    fg: Option<Color>,

    /// Background color, same forms as --fg
    #[arg(long, value_name = "COLOR")]
    bg: Option<Color>,

    /// YAML stylesheet to take a named style from
    #[arg(long, value_name = "PATH", requires = "style")]
    stylesheet: Option<PathBuf>,

    /// Name of the style to use from --stylesheet
    #[arg(long, value_name = "NAME", requires = "stylesheet")]
    style: Option<String>,

    /// Color each character along the hue circle
    #[arg(long, conflicts_with_all = ["fg", "stylesheet"])]
    rainbow: bool,

    /// Restart the rainbow on every line
    #[arg(long, requires = "rainbow")]
    per_line: bool,

    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

impl Cli {
    /// The style described by the modifier and color flags alone.
    fn flag_style(&self) -> Style {
        let toggles: [(bool, fn(&Style) -> Style); 7] = [
            (self.bold, Style::bold),
            (self.light, Style::light),
            (self.italic, Style::italic),
            (self.underline, Style::underline),
            (self.strikethrough, Style::strikethrough),
            (self.invert, Style::invert),
            (self.hidden, Style::hidden),
        ];

        let mut style = toggles
            .iter()
            .filter(|(on, _)| *on)
            .fold(Style::new(), |style, (_, apply)| apply(&style));

        if let Some(fg) = self.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        style
    }

    fn build_style(&self) -> Result<Style> {
        let base = match (&self.stylesheet, &self.style) {
            (Some(path), Some(name)) => {
                let styles = Styles::from_file(path)
                    .with_context(|| format!("failed to load stylesheet {}", path.display()))?;
                styles
                    .get(name)
                    .cloned()
                    .ok_or_else(|| anyhow!("style '{}' not found in {}", name, path.display()))?
            }
            _ => Style::new(),
        };
        Ok(base.merge(&self.flag_style()))
    }

    fn render(&self) -> Result<String> {
        if self.rainbow {
            let text = self.text.join(" ");
            let rainbow = presets::rainbow(&text, self.per_line);
            return Ok(self.flag_style().apply(&rainbow));
        }
        Ok(self.build_style()?.apply_all(&self.text))
    }
}

/// Keeps or strips escape codes according to `--color` and terminal support.
fn finish(output: String, choice: ColorChoice, supported: bool) -> String {
    let colored = match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => supported,
    };
    if colored {
        output
    } else {
        console::strip_ansi_codes(&output).into_owned()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let term = Term::stdout();

    let output = cli.render()?;
    let line = finish(output, cli.color, term.features().colors_supported());
    term.write_line(&line).context("failed to write to stdout")?;
    Ok(())
}
