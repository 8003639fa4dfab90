use anyhow::Result;
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router,
};
use serde::Deserialize;

use crate::commands::list::list_pdfs;
use crate::commands::split::{split_pdf, SplitOptions};
use crate::config::DEFAULT_OUTPUT_DIR;
use crate::partition::partition;

// Request structs for tools

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfListRequest {
    #[schemars(description = "Directory containing the PDF files")]
    pub directory: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfPartitionRequest {
    #[schemars(description = "Total number of pages in the document")]
    pub total_pages: u32,
    #[schemars(description = "Number of parts to divide the pages into")]
    pub pieces: u32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfSplitRequest {
    #[schemars(description = "Path to the PDF file to split")]
    pub path: String,
    #[schemars(description = "Number of parts to produce")]
    pub pieces: u32,
    #[schemars(description = "Output directory (default: split_pdfs)")]
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[schemars(description = "Skip parts that would contain no pages (default: false)")]
    #[serde(default)]
    pub skip_empty: bool,
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

#[derive(Debug, Clone)]
pub struct PdfSplitServer {
    tool_router: ToolRouter<Self>,
}

impl PdfSplitServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for PdfSplitServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl PdfSplitServer {
    #[tool(description = "List the PDF files in a directory together with their page counts")]
    fn pdf_list(
        &self,
        Parameters(PdfListRequest { directory }): Parameters<PdfListRequest>,
    ) -> String {
        match list_pdfs(&directory) {
            Ok(entries) => {
                serde_json::to_string_pretty(&entries).unwrap_or_else(|e| format!("Error: {}", e))
            }
            Err(e) => format!("Error: {:#}", e),
        }
    }

    #[tool(description = "Compute the 0-based half-open page ranges a document would be split into, without writing files")]
    fn pdf_partition(&self, Parameters(req): Parameters<PdfPartitionRequest>) -> String {
        match partition(req.total_pages, req.pieces) {
            Ok(pieces) => {
                serde_json::to_string_pretty(&pieces).unwrap_or_else(|e| format!("Error: {}", e))
            }
            Err(e) => format!("Error: {}", e),
        }
    }

    #[tool(description = "Split a PDF into the given number of roughly equal parts of consecutive pages, named <name>_part_<n>.pdf")]
    fn pdf_split(&self, Parameters(req): Parameters<PdfSplitRequest>) -> String {
        let options = SplitOptions {
            skip_empty: req.skip_empty,
        };

        match split_pdf(&req.path, req.pieces, &req.output_dir, &options) {
            Ok(report) => {
                serde_json::to_string_pretty(&report).unwrap_or_else(|e| format!("Error: {}", e))
            }
            Err(e) => format!("Error: {:#}", e),
        }
    }
}

#[tool_handler]
impl ServerHandler for PdfSplitServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PDF splitting tools. Use pdf_list to find PDFs and their page counts, \
                 pdf_partition to preview how pages would be divided, and pdf_split to write \
                 the parts to disk."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_server() -> Result<()> {
    let server = PdfSplitServer::new();

    tracing::info!("starting MCP server on stdio");
    let service = server.serve((tokio::io::stdin(), tokio::io::stdout())).await?;

    service.waiting().await?;

    Ok(())
}
