//! Line-driven exploration session.
//!
//! Each input line is one visitor action. The field is advanced to the
//! current clock reading before every command, so `list` shows where the
//! words have drifted to (or where they froze, while paused).

use std::io::{BufRead, Write};

use sf_core::{Filter, Mode, Session, Speed};

const HELP: &str = "\
commands:
  list                  show visible words and positions
  select <id>           open a word's paragraph (pauses drift)
  close | esc           close the paragraph (esc also hides the collection)
  pause                 pause or resume drift
  speed <slow|medium|fast>
  filter <all|q1|q2|q3>
  collect               collect or uncollect the open paragraph
  collection            show collected paragraphs
  hide                  hide the collection
  remove <n>            remove collected paragraph n
  copy                  print every collected paragraph
  help | quit";

pub fn run<R, W, C>(mut session: Session, input: R, mut out: W, mut clock: C) -> std::io::Result<()>
where
    R: BufRead,
    W: Write,
    C: FnMut() -> f64,
{
    writeln!(
        out,
        "{} words drifting. Type 'help' for commands.",
        session.field().visible_len()
    )?;

    for line in input.lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            continue;
        };
        let arg = parts.next();

        session.tick(clock());

        match cmd {
            "quit" | "exit" => break,
            "help" => writeln!(out, "{HELP}")?,
            "list" => list(&session, &mut out)?,
            "select" => match arg {
                Some(id) if session.select_id(id) => show_selected(&session, &mut out)?,
                Some(id) => writeln!(out, "no visible word '{id}'")?,
                None => writeln!(out, "usage: select <id>")?,
            },
            "close" => {
                session.close();
                writeln!(out, "{}", pause_label(&session))?;
            }
            "esc" => {
                session.escape();
                writeln!(out, "{}", pause_label(&session))?;
            }
            "pause" => {
                if matches!(session.mode(), Mode::Inspecting { .. }) {
                    writeln!(out, "close the paragraph first")?;
                } else {
                    session.toggle_pause();
                    writeln!(out, "{}", pause_label(&session))?;
                }
            }
            "speed" => match arg.map(str::parse::<Speed>) {
                Some(Ok(speed)) => {
                    session.set_speed(speed);
                    writeln!(out, "speed: {speed}")?;
                }
                Some(Err(e)) => writeln!(out, "{e}")?,
                None => writeln!(out, "speed: {}", session.speed())?,
            },
            "filter" => match arg.map(str::parse::<Filter>) {
                Some(Ok(filter)) => {
                    session.set_filter(filter);
                    writeln!(
                        out,
                        "filter: {filter} ({} words)",
                        session.field().visible_len()
                    )?;
                }
                Some(Err(e)) => writeln!(out, "{e}")?,
                None => writeln!(out, "filter: {}", session.filter())?,
            },
            "collect" => match session.collect_selected() {
                Some(true) => writeln!(out, "collected ({})", session.collection().len())?,
                Some(false) => writeln!(out, "removed ({})", session.collection().len())?,
                None => writeln!(out, "nothing selected")?,
            },
            "collection" => {
                session.show_collection();
                show_collection(&session, &mut out)?;
            }
            "hide" => {
                session.hide_collection();
                writeln!(out, "collection hidden")?;
            }
            "remove" => match arg.and_then(|a| a.parse::<usize>().ok()) {
                Some(n) if n >= 1 && session.remove_collected(n - 1).is_some() => {
                    writeln!(out, "removed #{n}")?;
                    if session.is_collection_open() {
                        show_collection(&session, &mut out)?;
                    }
                }
                _ => writeln!(out, "usage: remove <n> (1..={})", session.collection().len())?,
            },
            "copy" => {
                // Copying always reports success, even with nothing collected.
                writeln!(out, "{}", session.collection().export_text())?;
                writeln!(out, "copied {} paragraphs", session.collection().len())?;
            }
            other => writeln!(out, "unknown command '{other}' (try 'help')")?,
        }
    }

    out.flush()
}

fn pause_label(session: &Session) -> &'static str {
    if session.is_paused() { "paused" } else { "running" }
}

fn list(session: &Session, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "{} | speed {} | filter {} | collected {}",
        pause_label(session),
        session.speed(),
        session.filter(),
        session.collection().len()
    )?;
    if session.field().is_empty() {
        return writeln!(out, "(no words)");
    }
    for (word, pos) in session.field().visible() {
        writeln!(
            out,
            "{}\t{}\t[{}]\t({:.1}, {:.1})",
            word.id, word.text, word.category, pos.x, pos.y
        )?;
    }
    Ok(())
}

fn show_selected(session: &Session, out: &mut impl Write) -> std::io::Result<()> {
    let Some(word) = session.selected() else {
        return Ok(());
    };
    let mark = if session.is_selected_collected() { " *" } else { "" };
    writeln!(out, "[{}] {}{mark}", word.category.title(), word.text)?;
    writeln!(out, "{}", word.full_text)
}

fn show_collection(session: &Session, out: &mut impl Write) -> std::io::Result<()> {
    if session.collection().is_empty() {
        return writeln!(out, "(collection empty)");
    }
    for (i, text) in session.collection().iter().enumerate() {
        writeln!(out, "{}. {text}", i + 1)?;
    }
    Ok(())
}
