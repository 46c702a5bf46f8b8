//! Reading of the multipart event creation form.

use axum::extract::Multipart;

use crate::{
    model::event::CreateEventDto,
    server::{error::AppError, storage::ImageUpload, util::parse::parse_form_value},
};

/// Reads the event creation form into its DTO and optional image.
///
/// Text parts `title`, `date`, `remote` and `eventUrl` are required; `description`,
/// `city` and `state` are optional. A file part named `image` with an empty body is
/// treated as absent. Unknown parts are ignored.
///
/// # Returns
/// - `Ok((CreateEventDto, Option<ImageUpload>))` - Parsed form
/// - `Err(AppError::BadRequest)` - Malformed body, missing required part, or a `date`
///   or `remote` value that does not parse
pub async fn read_event_form(
    mut multipart: Multipart,
) -> Result<(CreateEventDto, Option<ImageUpload>), AppError> {
    let mut title = None;
    let mut description = None;
    let mut date = None;
    let mut remote = None;
    let mut event_url = None;
    let mut city = String::new();
    let mut state = String::new();
    let mut image = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "image" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(bad_multipart)?;

                if !bytes.is_empty() {
                    image = Some(ImageUpload {
                        filename,
                        content_type,
                        bytes,
                    });
                }
            }
            "title" => title = Some(field.text().await.map_err(bad_multipart)?),
            "description" => {
                let text = field.text().await.map_err(bad_multipart)?;
                description = (!text.is_empty()).then_some(text);
            }
            "date" => {
                let text = field.text().await.map_err(bad_multipart)?;
                date = Some(parse_form_value::<i64>("date", &text)?);
            }
            "remote" => {
                let text = field.text().await.map_err(bad_multipart)?;
                remote = Some(parse_form_value::<bool>("remote", &text)?);
            }
            "eventUrl" => event_url = Some(field.text().await.map_err(bad_multipart)?),
            "city" => city = field.text().await.map_err(bad_multipart)?,
            "state" => state = field.text().await.map_err(bad_multipart)?,
            _ => {}
        }
    }

    let dto = CreateEventDto {
        title: required("title", title)?,
        description,
        date: required("date", date)?,
        city,
        state,
        remote: required("remote", remote)?,
        event_url: required("eventUrl", event_url)?,
    };

    Ok((dto, image))
}

fn required<T>(field: &str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("Missing required field: {}", field)))
}

fn bad_multipart(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::BadRequest(err.body_text())
}
