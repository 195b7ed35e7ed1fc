use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use plaza_types::{ContentLine, Post, format_published_at, seed_posts};

use crate::types::OutputFormat;

pub fn handle(format: OutputFormat, no_color: bool) -> Result<()> {
    let posts = seed_posts();

    match format {
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            serde_json::to_writer_pretty(stdout.lock(), &posts)?;
            println!();
        }
        OutputFormat::Plain => {
            let enable_color = !no_color && std::io::stdout().is_terminal();
            print_feed(&posts, enable_color);
        }
    }

    Ok(())
}

fn print_feed(posts: &[Post], enable_color: bool) {
    if posts.is_empty() {
        let msg = "No posts to display";
        if enable_color {
            println!("{}", msg.bright_black());
        } else {
            println!("{}", msg);
        }
        return;
    }

    for (index, post) in posts.iter().enumerate() {
        if index > 0 {
            println!();
        }

        if enable_color {
            println!("{} {}", post.author.name.bold(), post.author.role.bright_black());
            println!("{}", format_published_at(post.published_at).bright_black());
        } else {
            println!("{} {}", post.author.name, post.author.role);
            println!("{}", format_published_at(post.published_at));
        }
        println!();

        for line in &post.content {
            match line {
                ContentLine::Paragraph(text) => println!("{}", text),
                ContentLine::Link(target) => {
                    if enable_color {
                        println!("{}", target.blue().underline());
                    } else {
                        println!("{}", target);
                    }
                }
                // Unrecognized tags produce no output
                ContentLine::Unknown => {}
            }
        }
    }
}
