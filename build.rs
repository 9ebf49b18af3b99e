use std::fs;

const CONFIG_PATH: &str = "src/default_config.toml";

fn main() {
    println!("cargo:rerun-if-changed={CONFIG_PATH}");

    let content = fs::read_to_string(CONFIG_PATH).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {e}"),
    };

    // The compiled-in defaults must name every path the site builder needs
    for (section, keys) in [
        ("paths", &["static_dir", "content_dir", "template", "output_dir"][..]),
        ("site", &["base_path"][..]),
    ] {
        let Some(section_table) = table.get(section).and_then(|v| v.as_table()) else {
            panic!("default_config.toml is missing [{section}]");
        };
        for key in keys {
            if !section_table.contains_key(*key) {
                panic!("default_config.toml is missing {section}.{key}");
            }
        }
    }
}
