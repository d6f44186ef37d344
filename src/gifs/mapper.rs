// Mapping from raw Giphy items to normalized Gif records.
// Pure, order-preserving, no side effects.

use crate::giphy::GiphyItem;

use super::types::Gif;

/// Map a single raw item to a normalized Gif.
pub fn map_item(item: GiphyItem) -> Gif {
    Gif {
        id: item.id,
        title: item.title,
        url: item.images.original.url,
    }
}

/// Map an ordered sequence of raw items, preserving order.
pub fn map_items(items: Vec<GiphyItem>) -> Vec<Gif> {
    items.into_iter().map(map_item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::giphy::{GiphyImages, GiphyRendition};

    fn raw(id: &str, title: &str, url: &str) -> GiphyItem {
        GiphyItem {
            id: id.to_string(),
            title: title.to_string(),
            images: GiphyImages {
                original: GiphyRendition {
                    url: url.to_string(),
                },
            },
        }
    }

    #[test]
    fn test_map_item_fields() {
        let gif = map_item(raw("g1", "Hello GIF", "https://media.giphy.com/g1.gif"));
        assert_eq!(gif.id, "g1");
        assert_eq!(gif.title, "Hello GIF");
        assert_eq!(gif.url, "https://media.giphy.com/g1.gif");
    }

    #[test]
    fn test_map_items_preserves_order() {
        let items = vec![
            raw("a", "A", "https://media.giphy.com/a.gif"),
            raw("b", "B", "https://media.giphy.com/b.gif"),
            raw("c", "C", "https://media.giphy.com/c.gif"),
        ];

        let gifs = map_items(items);
        let ids: Vec<&str> = gifs.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_map_items_empty() {
        assert!(map_items(Vec::new()).is_empty());
    }
}
