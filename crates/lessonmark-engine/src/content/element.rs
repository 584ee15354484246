use serde::{Deserialize, Serialize};

use crate::markup::MarkupText;

/// Closed set of element tags. Anything else deserializes to `Unknown` and
/// renders as a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    DefinitionBox,
    PropertyBox,
    ExampleBox,
    TheoremBox,
    MethodBox,
    ActivityBox,
    DemoBox,
    ConsequenceBox,
    ProofBox,
    RemarkBox,
    WarningBox,
    PracticeBox,
    #[default]
    P,
    Table,
    Image,
    #[serde(rename = "graph-2d")]
    Graph2d,
    Geogebra,
    #[serde(other)]
    Unknown,
}

/// Header and styling of a boxed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxStyle {
    /// Badge text.
    pub title: &'static str,
    /// CSS modifier class, e.g. `box-definition`.
    pub class: &'static str,
    /// Boxes of this kind get a running number.
    pub numbered: bool,
    /// Proof-like boxes never promote their preamble to the header.
    pub demonstration: bool,
}

impl BoxStyle {
    const fn new(title: &'static str, class: &'static str) -> Self {
        Self {
            title,
            class,
            numbered: true,
            demonstration: false,
        }
    }

    const fn unnumbered(self) -> Self {
        Self {
            numbered: false,
            ..self
        }
    }

    const fn demonstration(self) -> Self {
        Self {
            demonstration: true,
            ..self
        }
    }
}

/// How an element is laid out; one strategy per tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    Boxed(BoxStyle),
    /// Exercise with a statement and a solution hidden until asked for.
    Practice,
    Table,
    Image,
    Graph,
    GeoGebra,
    Paragraph,
}

impl ElementKind {
    pub fn strategy(self) -> RenderStrategy {
        use ElementKind::*;
        match self {
            DefinitionBox => RenderStrategy::Boxed(BoxStyle::new("Définition", "box-definition")),
            PropertyBox => RenderStrategy::Boxed(BoxStyle::new("Propriété", "box-property")),
            ExampleBox => RenderStrategy::Boxed(BoxStyle::new("Exemple", "box-example")),
            TheoremBox => RenderStrategy::Boxed(BoxStyle::new("Théorème", "box-theorem")),
            MethodBox => RenderStrategy::Boxed(BoxStyle::new("Méthode", "box-method")),
            ActivityBox => {
                RenderStrategy::Boxed(BoxStyle::new("Activité", "box-activity").unnumbered())
            }
            DemoBox => RenderStrategy::Boxed(
                BoxStyle::new("Démonstration", "box-demo")
                    .unnumbered()
                    .demonstration(),
            ),
            ConsequenceBox => {
                RenderStrategy::Boxed(BoxStyle::new("Conséquence", "box-consequence"))
            }
            ProofBox => RenderStrategy::Boxed(
                BoxStyle::new("Preuve", "box-proof")
                    .unnumbered()
                    .demonstration(),
            ),
            RemarkBox => RenderStrategy::Boxed(BoxStyle::new("Remarque", "box-remark")),
            WarningBox => RenderStrategy::Boxed(BoxStyle::new("Attention", "box-warning")),
            PracticeBox => RenderStrategy::Practice,
            Table => RenderStrategy::Table,
            Image => RenderStrategy::Image,
            Graph2d => RenderStrategy::Graph,
            Geogebra => RenderStrategy::GeoGebra,
            P | Unknown => RenderStrategy::Paragraph,
        }
    }

    pub fn box_style(self) -> Option<BoxStyle> {
        match self.strategy() {
            RenderStrategy::Boxed(style) => Some(style),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    #[default]
    Bullet,
    Numbered,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    Left,
    Right,
    #[default]
    Center,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonImage {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub position: ImagePosition,
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub allow_zoom: Option<bool>,
    #[serde(default)]
    pub transparent: bool,
    #[serde(default)]
    pub border: Option<bool>,
}

impl LessonImage {
    /// Transparent images have no frame unless one is forced.
    pub fn has_border(&self) -> bool {
        self.border.unwrap_or(!self.transparent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub cells: Vec<String>,
    #[serde(default)]
    pub is_header: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphFunction {
    #[serde(rename = "fn")]
    pub expression: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub graph_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Graph2d {
    #[serde(default)]
    pub functions: Vec<GraphFunction>,
    #[serde(default)]
    pub x_domain: Option<(f64, f64)>,
    #[serde(default)]
    pub y_domain: Option<(f64, f64)>,
    #[serde(default)]
    pub grid: Option<bool>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoGebraConfig {
    #[serde(default)]
    pub material_id: Option<String>,
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub commands: Vec<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonElement {
    #[serde(rename = "type", default)]
    pub kind: ElementKind,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub preamble: Option<String>,
    #[serde(default)]
    pub content: Option<MarkupText>,
    #[serde(default)]
    pub statement: Option<String>,
    #[serde(default)]
    pub solution: Option<MarkupText>,
    #[serde(default)]
    pub list_type: Option<ListType>,
    #[serde(default)]
    pub columns: Option<u8>,
    #[serde(default)]
    pub image: Option<LessonImage>,
    #[serde(default)]
    pub table_data: Option<Vec<TableRow>>,
    #[serde(default)]
    pub graph2d: Option<Graph2d>,
    #[serde(default)]
    pub geogebra: Option<GeoGebraConfig>,
}

impl LessonElement {
    /// List items, when the element asks for a list and its content is lines.
    pub fn list_items(&self) -> Option<(ListType, &[String])> {
        match (&self.list_type, &self.content) {
            (Some(list_type), Some(MarkupText::Lines(items))) => Some((*list_type, items)),
            _ => None,
        }
    }

    /// Text shown next to a box badge: the title, or for non-proof boxes the
    /// preamble when there is no title.
    pub fn header_text(&self, style: &BoxStyle) -> Option<&str> {
        self.title
            .as_deref()
            .or_else(|| (!style.demonstration).then_some(self.preamble.as_deref()).flatten())
    }

    /// Whether the preamble was promoted to the box header.
    pub fn preamble_in_header(&self, style: &BoxStyle) -> bool {
        self.preamble.is_some() && self.header_text(style) == self.preamble.as_deref()
    }
}

/// Identifier prefixes for the text fields of one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds(String);

impl ElementIds {
    /// Prefixes of the element at flat index `index` (see [`element_index`]).
    ///
    /// [`element_index`]: super::element_index
    pub fn new(index: usize) -> Self {
        Self(format!("el-{index}"))
    }

    pub fn root(&self) -> &str {
        &self.0
    }

    pub fn content(&self) -> String {
        format!("{}-cont", self.0)
    }

    pub fn preamble(&self) -> String {
        format!("{}-pre", self.0)
    }

    pub fn statement(&self) -> String {
        format!("{}-stmt", self.0)
    }

    pub fn solution(&self) -> String {
        format!("{}-sol", self.0)
    }

    pub fn list(&self) -> String {
        format!("{}-list", self.0)
    }

    pub fn table(&self) -> String {
        format!("{}-tbl", self.0)
    }

    pub fn plot(&self) -> String {
        format!("{}-plot", self.0)
    }

    pub fn geogebra(&self) -> String {
        format!("{}-ggb", self.0)
    }
}

/// Prefix of list item `idx` under a list prefix.
pub fn list_item_id(list_prefix: &str, idx: usize) -> String {
    format!("{list_prefix}-li-{idx}")
}

/// Prefix of header cell `(row, col)` under a table prefix.
pub fn table_header_id(table_prefix: &str, row: usize, col: usize) -> String {
    format!("{table_prefix}-th-{row}-{col}")
}

/// Prefix of body cell `(row, col)` under a table prefix.
pub fn table_cell_id(table_prefix: &str, row: usize, col: usize) -> String {
    format!("{table_prefix}-tr-{row}-td-{col}")
}
