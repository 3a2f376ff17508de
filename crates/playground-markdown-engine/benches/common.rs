// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_playground_source(sections: usize) -> String {
    let base = "//: ## Section\n//: Some prose describing the next snippet.\nlet values = [1, 2, 3]\nlet doubled = values.map { $0 * 2 }\nprint(doubled)\n";
    base.repeat(sections)
}

#[allow(dead_code)]
pub fn generate_code_only_source(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("let value{i} = {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}
