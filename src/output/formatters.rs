//! Formatting utilities for terminal output

use colored::Colorize;

/// Command summary shown by the banner: (syntax, description)
pub const COMMANDS: &[(&str, &str)] = &[
    ("c", "Crea un nuovo dizionario vuoto"),
    ("t", "Termina esecuzione"),
    ("c file", "Inserisce le parole e gli schemi contenuti nel file"),
    ("p", "Stampa tutte le parole del dizionario"),
    ("s", "Stampa tutti gli schemi del dizionario"),
    ("i w", "Inserisce la parola o lo schema w"),
    ("e w", "Elimina la parola o lo schema w"),
    ("r S", "Stampa lo schema S e le parole compatibili"),
    ("d x y", "Stampa la distanza di editing fra x e y"),
    ("c x y", "Stampa una catena di lunghezza minima fra x e y"),
    ("g x", "Stampa il gruppo della parola x"),
    ("f S", "Stampa la famiglia dello schema S"),
];

/// Build the startup banner
///
/// Styled with `colored`, which honours `NO_COLOR` and friends.
#[must_use]
pub fn banner() -> String {
    let rule = "═".repeat(70);
    let width = COMMANDS.iter().map(|(syntax, _)| syntax.len()).max().unwrap_or(0);

    let mut text = format!("\n{}\n", rule.bright_cyan());
    text.push_str(&format!(
        "{}\n",
        "  PAROLE E CATENE DI PAROLE".bright_yellow().bold()
    ));
    text.push_str(&format!(
        "  {}\n\n",
        "Gestione di un dizionario di parole e schemi.".bright_white()
    ));
    for (syntax, description) in COMMANDS {
        text.push_str(&format!(
            "  {} {}\n",
            format!("{syntax:<width$}").bright_green().bold(),
            description
        ));
    }
    text.push_str(&format!("{}\n", rule.bright_cyan()));
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_lists_every_command() {
        colored::control::set_override(false);
        let text = banner();
        for (syntax, description) in COMMANDS {
            assert!(text.contains(syntax), "{syntax}");
            assert!(text.contains(description), "{description}");
        }
    }

    #[test]
    fn banner_is_framed() {
        colored::control::set_override(false);
        let text = banner();
        assert_eq!(text.matches(&"═".repeat(70)).count(), 2);
    }
}
