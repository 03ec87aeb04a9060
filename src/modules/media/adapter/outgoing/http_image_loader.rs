use async_trait::async_trait;
use reqwest::{redirect::Policy, StatusCode, Url};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::{Component, Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::modules::media::application::domain::image_path::is_absolute_url;
use crate::modules::media::application::ports::outgoing::{ImageLoader, ImageLoaderError};

/// Loads remote images over HTTP and web-root paths from the public directory.
///
/// Remote requests carry no cookies or credentials. They only go to hosts
/// that resolve to public addresses, the connection is pinned to the checked
/// addresses, and redirects are not followed.
#[derive(Clone)]
pub struct HttpImageLoader {
    public_dir: PathBuf,
    timeout: Duration,
    max_bytes: u64,
}

impl HttpImageLoader {
    pub fn new(public_dir: impl Into<PathBuf>, timeout: Duration, max_bytes: u64) -> Self {
        Self {
            public_dir: public_dir.into(),
            timeout,
            max_bytes,
        }
    }

    async fn fetch_remote(&self, source: &str) -> Result<Vec<u8>, ImageLoaderError> {
        let url = Url::parse(source)
            .map_err(|e| ImageLoaderError::Rejected(format!("{source}: {e}")))?;
        let addrs = self.resolve_public(&url).await?;
        let client = self.pinned_client(&url, &addrs)?;

        let mut response = client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ImageLoaderError::Io(e.to_string()))?;
        let url = url.as_str();

        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND => return Err(ImageLoaderError::NotFound(url.to_string())),
            status => {
                return Err(ImageLoaderError::Rejected(format!(
                    "{url} answered {status}"
                )))
            }
        }

        if response.content_length().is_some_and(|len| len > self.max_bytes) {
            return Err(self.too_large());
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| ImageLoaderError::Io(e.to_string()))?
        {
            if (bytes.len() + chunk.len()) as u64 > self.max_bytes {
                return Err(self.too_large());
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }

    async fn read_local(&self, web_path: &str) -> Result<Vec<u8>, ImageLoaderError> {
        let path = resolve_public_path(&self.public_dir, web_path)?;

        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|_| ImageLoaderError::NotFound(web_path.to_string()))?;
        if !metadata.is_file() {
            return Err(ImageLoaderError::NotFound(web_path.to_string()));
        }
        if metadata.len() > self.max_bytes {
            return Err(self.too_large());
        }

        tokio::fs::read(&path)
            .await
            .map_err(|e| ImageLoaderError::Io(e.to_string()))
    }

    /// Every address the host resolves to must be public.
    async fn resolve_public(&self, url: &Url) -> Result<Vec<SocketAddr>, ImageLoaderError> {
        let rejected = || ImageLoaderError::Rejected(url.to_string());
        let host = url.host_str().ok_or_else(rejected)?;
        let port = url.port_or_known_default().ok_or_else(rejected)?;

        let bare = host.trim_start_matches('[').trim_end_matches(']');
        let addrs: Vec<SocketAddr> = match bare.parse::<IpAddr>() {
            Ok(ip) => vec![SocketAddr::new(ip, port)],
            Err(_) => tokio::time::timeout(self.timeout, tokio::net::lookup_host((host, port)))
                .await
                .map_err(|_| ImageLoaderError::Io(format!("resolving {host} timed out")))?
                .map_err(|e| ImageLoaderError::Io(e.to_string()))?
                .collect(),
        };

        if addrs.is_empty() || addrs.iter().any(|addr| !is_public_ip(addr.ip())) {
            debug!(%host, "Refusing to fetch image from a non-public address");
            return Err(rejected());
        }
        Ok(addrs)
    }

    fn pinned_client(
        &self,
        url: &Url,
        addrs: &[SocketAddr],
    ) -> Result<reqwest::Client, ImageLoaderError> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(Policy::none());
        if let Some(domain) = url.domain() {
            builder = builder.resolve_to_addrs(domain, addrs);
        }
        builder
            .build()
            .map_err(|e| ImageLoaderError::Io(e.to_string()))
    }

    fn too_large(&self) -> ImageLoaderError {
        ImageLoaderError::TooLarge {
            max_bytes: self.max_bytes,
        }
    }
}

fn is_public_ip(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => is_public_v4(v4),
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => is_public_v4(v4),
            None => is_public_v6(v6),
        },
    }
}

fn is_public_v4(ip: Ipv4Addr) -> bool {
    let [a, b, ..] = ip.octets();
    let shared = a == 100 && (64..128).contains(&b);
    !(ip.is_private()
        || ip.is_loopback()
        || ip.is_link_local()
        || ip.is_unspecified()
        || ip.is_broadcast()
        || ip.is_documentation()
        || ip.is_multicast()
        || shared
        || a == 0)
}

fn is_public_v6(ip: Ipv6Addr) -> bool {
    let first = ip.segments()[0];
    let unique_local = first & 0xfe00 == 0xfc00;
    let link_local = first & 0xffc0 == 0xfe80;
    !(ip.is_loopback() || ip.is_unspecified() || ip.is_multicast() || unique_local || link_local)
}

/// Joins a web-root path onto the public directory. Anything that could
/// step outside of it is rejected.
fn resolve_public_path(public_dir: &Path, web_path: &str) -> Result<PathBuf, ImageLoaderError> {
    let relative = Path::new(web_path.trim_start_matches('/'));

    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if relative.as_os_str().is_empty() || escapes {
        return Err(ImageLoaderError::Rejected(web_path.to_string()));
    }

    Ok(public_dir.join(relative))
}

#[async_trait]
impl ImageLoader for HttpImageLoader {
    async fn load(&self, source: &str) -> Result<Vec<u8>, ImageLoaderError> {
        if is_absolute_url(source) {
            self.fetch_remote(source).await
        } else {
            self.read_local(source).await
        }
    }
}
