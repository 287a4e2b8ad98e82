//! Show command implementation

use console::Style;

use crate::bundle::{BaseImage, Bundle, Location};
use crate::cli::ShowArgs;
use crate::codec;
use crate::error::Result;

macro_rules! display_field {
    ($label:expr, $value:expr) => {
        if !$value.is_empty() {
            println!("{} {}", Style::new().bold().apply_to($label), $value);
        }
    };
}

pub fn run(args: ShowArgs) -> Result<()> {
    let bundle = codec::read_file(&args.file)?;
    display_bundle(&bundle, args.detailed);
    Ok(())
}

fn display_bundle(bundle: &Bundle, detailed: bool) {
    println!(
        "{} {}",
        Style::new().bold().yellow().apply_to(&bundle.name),
        Style::new().dim().apply_to(&bundle.version)
    );
    display_field!("Description:", bundle.description);
    display_field!("Keywords:", bundle.keywords.join(", "));

    if !bundle.maintainers.is_empty() {
        println!("{}", Style::new().bold().apply_to("Maintainers:"));
        for m in &bundle.maintainers {
            let contact = [m.email.as_str(), m.url.as_str()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            if contact.is_empty() {
                println!("  {}", m.name);
            } else {
                println!("  {} ({})", m.name, contact);
            }
        }
    }

    println!("{}", Style::new().bold().apply_to("Invocation images:"));
    for image in &bundle.invocation_images {
        display_image(&image.base, None, detailed);
    }

    if !bundle.images.is_empty() {
        println!("{}", Style::new().bold().apply_to("Images:"));
        for (name, image) in &bundle.images {
            display_image(&image.base, Some(name), detailed);
        }
    }

    if !bundle.actions.is_empty() {
        println!("{}", Style::new().bold().apply_to("Actions:"));
        for (name, action) in &bundle.actions {
            let mut flags = Vec::new();
            if action.modifies {
                flags.push("modifies");
            }
            if action.stateless {
                flags.push("stateless");
            }
            let flags = if flags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", flags.join(", "))
            };
            println!(
                "  {}{} {}",
                Style::new().cyan().apply_to(name),
                flags,
                action.description
            );
        }
    }

    if !bundle.parameters.is_empty() {
        println!("{}", Style::new().bold().apply_to("Parameters:"));
        for (name, def) in &bundle.parameters {
            let requirement = if def.required {
                Style::new().red().apply_to("required".to_string())
            } else {
                let default = def
                    .default
                    .as_ref()
                    .map_or_else(|| "none".to_string(), ToString::to_string);
                Style::new().dim().apply_to(format!("default {default}"))
            };
            println!(
                "  {} ({}, {})",
                Style::new().cyan().apply_to(name),
                def.data_type,
                requirement
            );
            if !def.metadata.description.is_empty() {
                println!("    {}", def.metadata.description);
            }
        }
    }

    if !bundle.credentials.is_empty() {
        println!("{}", Style::new().bold().apply_to("Credentials:"));
        for (name, location) in &bundle.credentials {
            println!(
                "  {} -> {}",
                Style::new().cyan().apply_to(name),
                describe_location(location)
            );
        }
    }

    if detailed && !bundle.custom.is_empty() {
        println!("{}", Style::new().bold().apply_to("Custom:"));
        for (key, value) in &bundle.custom {
            println!("  {key}: {value}");
        }
    }
}

fn display_image(image: &BaseImage, name: Option<&String>, detailed: bool) {
    match name {
        Some(name) => println!(
            "  {} {} ({})",
            Style::new().cyan().apply_to(name),
            image.image,
            image.image_type
        ),
        None => println!("  {} ({})", image.image, image.image_type),
    }

    if !detailed {
        return;
    }
    if !image.digest.is_empty() {
        println!("    digest: {}", image.digest);
    }
    if image.size > 0 {
        println!("    size: {}", image.size);
    }
    if let Some(platform) = &image.platform {
        println!("    platform: {}/{}", platform.os, platform.architecture);
    }
}

fn describe_location(location: &Location) -> String {
    match (location.path.is_empty(), location.environment_variable.is_empty()) {
        (false, false) => format!("{} and ${}", location.path, location.environment_variable),
        (false, true) => location.path.clone(),
        (true, false) => format!("${}", location.environment_variable),
        (true, true) => "(unspecified)".to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_location() {
        assert_eq!(describe_location(&Location::path("/etc/x")), "/etc/x");
        assert_eq!(describe_location(&Location::env("TOKEN")), "$TOKEN");
        assert_eq!(
            describe_location(&Location::default()),
            "(unspecified)".to_string()
        );

        let both = Location {
            path: "/p".to_string(),
            environment_variable: "E".to_string(),
        };
        assert_eq!(describe_location(&both), "/p and $E");
    }
}
