//! Terminal browser for the people and planets listings
//!
//! ```text
//! cargo run --example browse [config.yaml]
//!
//! > n            next page
//! > p            previous page
//! > g 4          go to page 4
//! > s sky        search (debounced)
//! > o created    sort by column, again to flip direction
//! > t            switch between people and planets
//! > i Tatooine   AI insight for a name
//! > q            quit
//! ```

use anyhow::Result;
use std::time::Duration;
use swapi_table::prelude::*;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

enum Listing {
    People(Arc<ListController<Person>>),
    Planets(Arc<ListController<Planet>>),
}

fn render<T>(title: &str, state: &ListQueryState<T>, row: impl Fn(&T) -> String) {
    let name = state.sort_indicator(SortColumn::Name);
    let created = state.sort_indicator(SortColumn::Created);
    let arrow = |indicator: SortIndicator| match (indicator.active, indicator.direction) {
        (false, _) => "·",
        (true, SortOrder::Ascending) => "▲",
        (true, SortOrder::Descending) => "▼",
    };

    println!();
    println!(
        "== {} == search: {:?}  [name {}] [created {}]",
        title,
        state.search_query(),
        arrow(name),
        arrow(created)
    );
    for item in state.items() {
        println!("  {}", row(item));
    }

    let view = state.pagination();
    let pages: Vec<String> = view.indices.iter().map(ToString::to_string).collect();
    println!("  {}  |  {}", view.summary(), pages.join(" "));
    if let Some(error) = state.last_error() {
        println!("  (last fetch failed: {})", error);
    }
}

async fn wait_and_render(listing: &Listing) -> Result<()> {
    match listing {
        Listing::People(people) => {
            let mut updates = people.subscribe();
            let state = updates.wait_for(|s| !s.is_loading()).await?.clone();
            render("People", &state, |p| {
                format!(
                    "{:<24} {:<8} {:<8} {:<14} {}",
                    p.name,
                    p.birth_year.as_deref().unwrap_or("?"),
                    p.gender.as_deref().unwrap_or("?"),
                    p.homeworld_name.as_deref().unwrap_or("?"),
                    p.created.format("%Y-%m-%d")
                )
            });
        }
        Listing::Planets(planets) => {
            let mut updates = planets.subscribe();
            let state = updates.wait_for(|s| !s.is_loading()).await?.clone();
            render("Planets", &state, |p| {
                format!(
                    "{:<20} {:<24} {:<24} {}",
                    p.name,
                    p.climate.as_deref().unwrap_or("?"),
                    p.terrain.as_deref().unwrap_or("?"),
                    p.created.format("%Y-%m-%d")
                )
            });
        }
    }
    Ok(())
}

fn page_of(listing: &Listing) -> PaginationView {
    match listing {
        Listing::People(c) => c.snapshot().pagination(),
        Listing::Planets(c) => c.snapshot().pagination(),
    }
}

fn set_page(listing: &Listing, page: usize) {
    match listing {
        Listing::People(c) => c.set_page(page),
        Listing::Planets(c) => c.set_page(page),
    };
}

fn sort(listing: &Listing, column: SortColumn) {
    match listing {
        Listing::People(c) => c.handle_sort(column),
        Listing::Planets(c) => c.handle_sort(column),
    };
}

fn search_debouncer(listing: &Listing, delay: Duration) -> Debouncer<String> {
    match listing {
        Listing::People(c) => {
            let c = Arc::clone(c);
            Debouncer::spawn(delay, move |q: String| {
                c.handle_search(&q);
            })
        }
        Listing::Planets(c) => {
            let c = Arc::clone(c);
            Debouncer::spawn(delay, move |q: String| {
                c.handle_search(&q);
            })
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ClientConfig::from_yaml_file(path)?,
        None => ClientConfig::default(),
    }
    .with_env_overrides()?;

    let client = SwapiClient::new(&config)?;
    let options = ListOptions::from_config(&config);

    let people = Arc::new(ListController::mount(Arc::new(client.people()), options));
    let planets = Arc::new(ListController::mount(Arc::new(client.planets()), options));
    let insight = InsightPanel::new(Arc::new(client.clone()));

    let mut listing = Listing::People(Arc::clone(&people));
    let mut search = search_debouncer(&listing, config.debounce());
    wait_and_render(&listing).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "q" => break,
            "n" => {
                if let Some(next) = page_of(&listing).next_page() {
                    set_page(&listing, next);
                }
            }
            "p" => {
                if let Some(prev) = page_of(&listing).prev_page() {
                    set_page(&listing, prev);
                }
            }
            "g" => match arg.parse::<usize>() {
                Ok(page) if (1..=page_of(&listing).total_pages).contains(&page) => {
                    set_page(&listing, page)
                }
                _ => println!("no such page: {}", arg),
            },
            "s" => {
                search.push(arg.to_string());
                tokio::time::sleep(config.debounce() + Duration::from_millis(20)).await;
            }
            "o" => match arg {
                "name" => sort(&listing, SortColumn::Name),
                "created" => sort(&listing, SortColumn::Created),
                _ => println!("sortable columns: name, created"),
            },
            "t" => {
                listing = match listing {
                    Listing::People(_) => Listing::Planets(Arc::clone(&planets)),
                    Listing::Planets(_) => Listing::People(Arc::clone(&people)),
                };
                search = search_debouncer(&listing, config.debounce());
            }
            "i" => {
                insight.open(arg);
                let mut updates = insight.subscribe();
                let state = updates.wait_for(|s| !s.loading).await?.clone();
                if let Some(title) = state.title() {
                    println!("\n{}", title);
                }
                match (&state.description, &state.error) {
                    (Some(description), _) => println!("{}", description),
                    (None, Some(error)) => println!("insight unavailable: {}", error),
                    (None, None) => {}
                }
                insight.close();
                continue;
            }
            _ => {
                println!("commands: n, p, g <page>, s <text>, o <column>, t, i <name>, q");
                continue;
            }
        }

        wait_and_render(&listing).await?;
    }

    Ok(())
}
