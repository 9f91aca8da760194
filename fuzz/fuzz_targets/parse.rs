#![no_main]

use libfuzzer_sys::fuzz_target;
use viper::parser::ParseOptions;

fuzz_target!(|data: &[u8]| {
    // Only UTF-8 input reaches the lexer
    if let Ok(s) = std::str::from_utf8(data) {
        // Lex, and parse whatever lexes; both must fail with an error, never a panic
        let _ = viper::parse_source_with_options(s, ParseOptions { max_depth: 256 });
    }
});
