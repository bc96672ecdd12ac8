//! HTTP gateway implementation for the Chordex service
//! Chordex服务的HTTP网关实现

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

use super::catalog::MusicCatalog;
use super::gateway::{create_gateway_router, GatewayState};
use crate::gemini::TextGenerator;

/// Chordex HTTP gateway / Chordex HTTP网关
pub struct HttpGateway {
    addr: SocketAddr,
    state: GatewayState,
}

impl HttpGateway {
    /// Create a new HTTP gateway / 创建新的HTTP网关
    pub fn new(
        addr: SocketAddr,
        catalog: Arc<MusicCatalog>,
        generator: Option<Arc<dyn TextGenerator>>,
    ) -> Self {
        Self {
            addr,
            state: GatewayState {
                catalog: Some(catalog),
                generator,
            },
        }
    }

    /// Get the HTTP address / 获取HTTP地址
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Start the HTTP gateway / 启动HTTP网关
    pub async fn start(self) -> Result<()> {
        info!("Starting Chordex HTTP gateway on {}", self.addr);

        let app = create_gateway_router(self.state);

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        info!("Chordex HTTP gateway listening on {}", self.addr);

        if let Err(e) = axum::serve(listener, app).await {
            error!("Chordex HTTP gateway error: {}", e);
            return Err(e.into());
        }

        Ok(())
    }
}
