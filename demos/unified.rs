use lcs_diff_rs::{inline, render, tokenizer::Lines, Error, LcsDiff};

/// An example flow of a line comparison
/// This demo covers diffing two revisions of a text, printing the unified view
/// and then refining the changed lines word by word

// This is the source text
const TXT_OLD: &str = "I am the very model of a modern Major-General,
I've information vegetable, animal, and mineral,
I know the kings of England, and I quote the fights historical,
From Marathon to Waterloo, in order categorical.";

// Let's assume this to be the text that was editted from the source text
const TXT_NEW: &str = "I am the very model of a modern Major-General,
I've information vegetable, animal, and botanical,
From Marathon to Waterloo, in order categorical.
In short, in matters vegetable, animal, and mineral,";

fn main() -> Result<(), Error> {
    // initializing the module
    let ld = LcsDiff::new();

    // create the edit script; the checked variant refuses degenerate inputs
    // whose comparison table would not fit the configured ceiling
    let script = ld.compare_checked::<Lines>(TXT_OLD, TXT_NEW)?;

    // summary counters first
    let stats = script.stats();
    println!(
        "{} added, {} removed, {} changed",
        stats.additions, stats.deletions, stats.changes
    );

    // the classic unified rendering
    println!("{}", render::unified_text(&script));

    // the same script as a two-column view, e.g. for a side-by-side widget
    for row in render::split_rows(&script) {
        let fmt = |cell: Option<render::Cell>| match cell {
            Some(c) => format!("{:>4} {}", c.number, c.text),
            None => String::new(),
        };

        println!("{:<56} | {}", fmt(row.left), fmt(row.right));
    }

    // lets zoom into the replaced lines and mark the exact words that moved
    for change in inline::refine_script(&ld, &script) {
        println!("\nline {} -> line {}", change.old_index + 1, change.new_index + 1);

        let render_segments = |segments: &[inline::Segment]| {
            segments
                .iter()
                .map(|s| {
                    if s.changed {
                        format!("[{}]", s.text)
                    } else {
                        s.text.to_string()
                    }
                })
                .collect::<String>()
        };

        // changed words come out bracketed
        println!("- {}", render_segments(&change.removed));
        println!("+ {}", render_segments(&change.added));
    }

    Ok(())
}
