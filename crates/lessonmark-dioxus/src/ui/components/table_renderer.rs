use super::{AnnotationProps, ProcessedContent};
use dioxus::prelude::*;
use lessonmark_engine::{MarkupText, TableRow, table_cell_id, table_header_id};

/// Header rows go to `thead`, the rest to `tbody`; each group is numbered
/// from zero for cell identifiers.
#[component]
pub fn TableRenderer(rows: Vec<TableRow>, id_prefix: String, annotations: AnnotationProps) -> Element {
    let (header, body): (Vec<TableRow>, Vec<TableRow>) =
        rows.into_iter().partition(|row| row.is_header);

    rsx! {
        div {
            class: "table-wrapper",
            table {
                class: "lesson-table",
                thead {
                    for (r, row) in header.into_iter().enumerate() {
                        tr {
                            for (c, cell) in row.cells.into_iter().enumerate() {
                                th {
                                    ProcessedContent {
                                        text: MarkupText::from(cell),
                                        id_prefix: table_header_id(&id_prefix, r, c),
                                        annotations: annotations.clone(),
                                    }
                                }
                            }
                        }
                    }
                }
                tbody {
                    for (r, row) in body.into_iter().enumerate() {
                        tr {
                            for (c, cell) in row.cells.into_iter().enumerate() {
                                td {
                                    ProcessedContent {
                                        text: MarkupText::from(cell),
                                        id_prefix: table_cell_id(&id_prefix, r, c),
                                        annotations: annotations.clone(),
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
