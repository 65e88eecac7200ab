//! Built-in catalog shown when the spreadsheet has never been read
//! successfully.
//!
//! Images are inline SVG `data:` URIs so the fallback renders without any
//! network access.

use crate::catalog::CatalogEntry;

struct DefaultEntry {
    name: &'static str,
    external_id: &'static str,
    description: &'static str,
    image_reference: &'static str,
    stock_count: &'static str,
    price: &'static str,
    category: &'static str,
}

const DEFAULT_ENTRIES: [DefaultEntry; 6] = [
    DefaultEntry {
        name: "NOTEBOOK NITRO 5",
        external_id: "1",
        description: "NOTEBOOK NITRO 5 - RYZEN 7 4800H, GTX 1650, 20GB RAM E SSD NVME DE 960GB - 15.6\" 144HZ",
        image_reference: "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iNDAwIiBoZWlnaHQ9IjMwMCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iMTAwJSIgaGVpZ2h0PSIxMDAlIiBmaWxsPSIjNGY0NmV1Ii8+PHRleHQgeD0iNTAlIiB5PSI1MCUiIGZvbnQtZmFtaWx5PSJBcmlhbCIgZm9udC1zaXplPSIyNCIgZmlsbD0id2hpdGUiIHRleHQtYW5jaG9yPSJtaWRkbGUiIGR5PSIuM2VtIj5OT1RFQk9PSzwvdGV4dD48L3N2Zz4=",
        stock_count: "1",
        price: "R$ 4.500,00",
        category: "NOTEBOOK",
    },
    DefaultEntry {
        name: "PROCESSADOR I5 11400",
        external_id: "2",
        description: "PROCESSADOR INTEL CORE I5 11400",
        image_reference: "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iNDAwIiBoZWlnaHQ9IjMwMCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iMTAwJSIgaGVpZ2h0PSIxMDAlIiBmaWxsPSIjMDU5NjY5Ii8+PHRleHQgeD0iNTAlIiB5PSI1MCUiIGZvbnQtZmFtaWx5PSJBcmlhbCIgZm9udC1zaXplPSIyNCIgZmlsbD0id2hpdGUiIHRleHQtYW5jaG9yPSJtaWRkbGUiIGR5PSIuM2VtIj5QUk9DRVNTQURPUjwvdGV4dD48L3N2Zz4=",
        stock_count: "1",
        price: "R$ 950,00",
        category: "PROCESSADOR",
    },
    DefaultEntry {
        name: "PLACA MÃE H510M-D",
        external_id: "3",
        description: "PLACA MÃE ASUS H510M-D - LGA1200",
        image_reference: "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iNDAwIiBoZWlnaHQ9IjMwMCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iMTAwJSIgaGVpZ2h0PSIxMDAlIiBmaWxsPSIjZGMyNjI2Ii8+PHRleHQgeD0iNTAlIiB5PSI1MCUiIGZvbnQtZmFtaWx5PSJBcmlhbCIgZm9udC1zaXplPSIyNCIgZmlsbD0id2hpdGUiIHRleHQtYW5jaG9yPSJtaWRkbGUiIGR5PSIuM2VtIj5QTEFDQSBNAUU8L3RleHQ+PC9zdmc+",
        stock_count: "1",
        price: "R$ 550,00",
        category: "PLACA-MÃE",
    },
    DefaultEntry {
        name: "SSD M2 WD GREEN 120GB",
        external_id: "4",
        description: "SSD WD GREEN DE 120GB DE ARMAZENAMENTO, CONEXÃO M2",
        image_reference: "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iNDAwIiBoZWlnaHQ9IjMwMCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iMTAwJSIgaGVpZ2h0PSIxMDAlIiBmaWxsPSIjN2MzYWVkIi8+PHRleHQgeD0iNTAlIiB5PSI1MCUiIGZvbnQtZmFtaWx5PSJBcmlhbCIgZm9udC1zaXplPSIyNCIgZmlsbD0id2hpdGUiIHRleHQtYW5jaG9yPSJtaWRkbGUiIGR5PSIuM2VtIj5TU0QgTTI8L3RleHQ+PC9zdmc+",
        stock_count: "3",
        price: "R$ 110,00",
        category: "DISCO",
    },
    DefaultEntry {
        name: "SSD SATA HIKVISION 240GB",
        external_id: "5",
        description: "SSD HIKVISION DE 240GB DE ARMAZENAMENTO, CONEXÃO SATA",
        image_reference: "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iNDAwIiBoZWlnaHQ9IjMwMCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iMTAwJSIgaGVpZ2h0PSIxMDAlIiBmaWxsPSIjZWE1ODBjIi8+PHRleHQgeD0iNTAlIiB5PSI1MCUiIGZvbnQtZmFtaWx5PSJBcmlhbCIgZm9udC1zaXplPSIyNCIgZmlsbD0id2hpdGUiIHRleHQtYW5jaG9yPSJtaWRkbGUiIGR5PSIuM2VtIj5TU0QgU0FUQTwvdGV4dD48L3N2Zz4=",
        stock_count: "2",
        price: "R$ 130,00",
        category: "DISCO",
    },
    DefaultEntry {
        name: "HD SEAGATE BARRACUDA 1TB - DESKTOP",
        external_id: "8",
        description: "HD SEAGATE DE 1 TB DE ARMAZENAMENTO - MODELO DE DESKTOP",
        image_reference: "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iNDAwIiBoZWlnaHQ9IjMwMCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iMTAwJSIgaGVpZ2h0PSIxMDAlIiBmaWxsPSIjMTZhMzRhIi8+PHRleHQgeD0iNTAlIiB5PSI1MCUiIGZvbnQtZmFtaWx5PSJBcmlhbCIgZm9udC1zaXplPSIyNCIgZmlsbD0id2hpdGUiIHRleHQtYW5jaG9yPSJtaWRkbGUiIGR5PSIuM2VtIj5IRCBTRUFHQVRFPC90ZXh0Pjwvc3ZnPg==",
        stock_count: "16",
        price: "R$ 150,00",
        category: "DISCO",
    },
];

/// Returns the fixed fallback catalog, in display order.
#[must_use]
pub fn default_entries() -> Vec<CatalogEntry> {
    DEFAULT_ENTRIES
        .iter()
        .map(|d| CatalogEntry {
            name: d.name.to_owned(),
            external_id: d.external_id.to_owned(),
            description: d.description.to_owned(),
            image_reference: d.image_reference.to_owned(),
            stock_count: d.stock_count.to_owned(),
            price: d.price.to_owned(),
            category: d.category.to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_six_entries() {
        assert_eq!(default_entries().len(), 6);
    }

    #[test]
    fn default_entries_have_names_and_embedded_images() {
        for entry in default_entries() {
            assert!(!entry.name.trim().is_empty());
            assert!(
                entry.image_reference.starts_with("data:image/svg+xml;base64,"),
                "unexpected image for {}: {}",
                entry.name,
                entry.image_reference
            );
        }
    }

    #[test]
    fn default_entries_cover_several_categories() {
        let mut categories: Vec<String> =
            default_entries().into_iter().map(|e| e.category).collect();
        categories.dedup();
        assert!(categories.contains(&"NOTEBOOK".to_owned()));
        assert!(categories.contains(&"DISCO".to_owned()));
        assert!(categories.len() >= 4);
    }
}
