use int_list::LinkedList;
use std::io::{self, Write};
use std::process;

/// Runs the fixed push/pop/print sequence against `list`, writing everything to `out`.
fn run_demo<W: Write>(list: &mut LinkedList, out: &mut W) -> io::Result<()> {
    for value in &[10, 20, 50] {
        log::debug!("Pushing {}", value);
        list.push_front(*value);
    }
    list.print_to(out)?;

    if let Some(value) = list.pop_front() {
        writeln!(out, "Popped: {}", value)?;
    }
    list.print_to(out)?;

    // Drain whatever is left
    while let Some(value) = list.pop_front() {
        writeln!(out, "Removed: {}", value)?;
    }
    list.print_to(out)?;

    Ok(())
}

fn main() {
    pretty_env_logger::init();

    let mut list = LinkedList::new();
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(err) = run_demo(&mut list, &mut handle) {
        log::error!("Error writing to stdout: {}", err);
        process::exit(1);
    }
    log::info!("Demo finished with {} values left in the list", list.len());
}
