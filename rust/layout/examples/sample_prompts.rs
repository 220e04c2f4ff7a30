// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Prints the scene documents for a few representative prompts.
//!
//! Run with: cargo run -p archprompt-layout --example sample_prompts

use archprompt_layout::{build_scene, LayoutConfig};

const PROMPTS: &[(&str, &str)] = &[
    ("2-bedroom apartment", "A 2-bedroom apartment with modern kitchen"),
    (
        "Scandinavian apartment",
        "A scandinavian 1-bedroom apartment, 60 square meters",
    ),
    (
        "Industrial loft",
        "An industrial loft with living room and bathroom",
    ),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = LayoutConfig::default();

    for (i, (title, prompt)) in PROMPTS.iter().enumerate() {
        if i > 0 {
            println!("\n{}\n", "=".repeat(80));
        }
        let scene = build_scene(prompt, &config)?;
        println!("Example {}: {}", i + 1, title);
        println!("{}", scene.to_json_pretty()?);
    }

    Ok(())
}
