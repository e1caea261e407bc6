//! Handler for `context7 docs`.

use crate::client::Context7Client;
use crate::error::Error;
use crate::models::DocsRequest;
use crate::render;

pub async fn execute_docs_command(
    client: &Context7Client,
    request: &DocsRequest,
) -> Result<(), Error> {
    let content = client.docs(request).await?;
    // ast-grep-ignore: no-println
    print!("{}", render::render_docs(request, &content));
    Ok(())
}
