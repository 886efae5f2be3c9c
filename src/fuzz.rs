use crate::{LcsDiff, Lines, Tokenize, Words};

pub fn fuzz(old: &str, new: &str) {
    let ld = LcsDiff::new();

    let script = ld.compare::<Lines>(old, new);
    assert_eq!(old, script.original_text());
    assert_eq!(new, script.modified_text());
    assert!(script.len() <= Lines::tokenize(old).len() + Lines::tokenize(new).len());

    let script = ld.compare::<Words>(old, new);
    assert_eq!(old, script.original_text());
    assert_eq!(new, script.modified_text());
    assert!(script.len() <= Words::tokenize(old).len() + Words::tokenize(new).len());
}
