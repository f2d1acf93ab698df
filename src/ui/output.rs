use std::io::{self, Write};

use crate::domain::value_objects::{BuildWarning, ConfigWarning};
use crate::ui::theme::Glyphs;

pub fn print_config_warnings(warnings: &[ConfigWarning], unicode: bool) {
    let mut err = io::stderr().lock();
    let _ = write_config_warnings(&mut err, warnings, unicode);
}

pub fn write_config_warnings(
    out: &mut impl Write,
    warnings: &[ConfigWarning],
    unicode: bool,
) -> io::Result<()> {
    let warn = Glyphs::new(unicode).warning;
    for w in warnings {
        if let Some(line) = w.line {
            writeln!(
                out,
                "{} Unknown config key '{}' in {}:{}",
                warn,
                w.key,
                w.file.display(),
                line
            )?;
        } else {
            writeln!(out, "{} Unknown config key '{}' in {}", warn, w.key, w.file.display())?;
        }

        if let Some(suggestion) = &w.suggestion {
            writeln!(out, "   Did you mean '{}'?\n", suggestion)?;
        }
    }
    Ok(())
}

pub fn print_build_warnings(warnings: &[BuildWarning], unicode: bool) {
    let mut err = io::stderr().lock();
    let _ = write_build_warnings(&mut err, warnings, unicode);
}

pub fn write_build_warnings(
    out: &mut impl Write,
    warnings: &[BuildWarning],
    unicode: bool,
) -> io::Result<()> {
    let warn = Glyphs::new(unicode).warning;
    for w in warnings {
        writeln!(out, "{} {}", warn, w)?;
    }
    Ok(())
}
