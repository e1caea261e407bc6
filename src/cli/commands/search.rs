//! Handler for `context7 search`.

use crate::client::Context7Client;
use crate::error::Error;
use crate::models::SearchQuery;
use crate::render;

pub async fn execute_search_command(
    client: &Context7Client,
    query: &SearchQuery,
) -> Result<(), Error> {
    let records = client.search(query).await?;
    // ast-grep-ignore: no-println
    print!("{}", render::render_search(&query.library_name, &records));
    Ok(())
}
