use gallery_core::{AppViewModel, ImageTile};
use gallery_engine::FetchSettings;

const GRID_COLUMNS: usize = 2;

/// Renders one snapshot as terminal lines.
pub fn render(view: &AppViewModel, settings: &FetchSettings) -> Vec<String> {
    let mut lines = Vec::new();

    if !view.category_buttons.is_empty() {
        let buttons: Vec<String> = view
            .category_buttons
            .iter()
            .map(|button| {
                if button.enabled {
                    format!("[{}]", button.label)
                } else {
                    format!("({})", button.label)
                }
            })
            .collect();
        lines.push(format!("Categories: {}", buttons.join(" ")));
    }

    if view.loading {
        lines.push("Loading...".to_string());
    }

    if let Some(error) = &view.error {
        lines.push(format!("Error: {error}"));
        lines.push("Type `reload` to try again.".to_string());
    }

    if view.show_grid {
        for row in view.tiles.chunks(GRID_COLUMNS) {
            let cells: Vec<String> = row.iter().map(|tile| format_tile(tile, settings)).collect();
            lines.push(cells.join(" | "));
        }
    } else if !view.loading && view.error.is_none() {
        lines.push("No images to show.".to_string());
    }

    lines
}

fn format_tile(tile: &ImageTile, settings: &FetchSettings) -> String {
    let url = settings
        .image_url(&tile.path)
        .map(|url| url.to_string())
        .unwrap_or_else(|_| tile.path.clone());
    format!("{url} ({} by {})", tile.category, tile.author)
}
