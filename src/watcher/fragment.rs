use super::form::{ActivePolicy, FormState};

#[derive(Debug, thiserror::Error)]
pub enum FragmentError {
    /// The fragment was requested outside an authorized host context.
    #[error("invalid access")]
    AccessDenied,
}

/// Renders the configuration form fragment.
///
/// `embedded` is the host panel's inclusion guard made explicit: callers must
/// assert they are embedding the fragment from an authorized context, or the
/// render stops with [`FragmentError::AccessDenied`] and no markup at all.
pub fn render_fragment(
    embedded: bool,
    form: &FormState,
    policy: ActivePolicy,
) -> Result<String, FragmentError> {
    if !embedded {
        return Err(FragmentError::AccessDenied);
    }

    let checkbox = match policy {
        // The legacy file-strategy fragment emitted the attribute either way
        // and only filled in its value when a token was stored.
        ActivePolicy::TokenPresent => {
            if form.api_token.is_empty() {
                r#" checked="""#.to_string()
            } else {
                r#" checked="checked""#.to_string()
            }
        }
        ActivePolicy::ActiveFlag => {
            if form.active_checked {
                " checked".to_string()
            } else {
                String::new()
            }
        }
    };

    Ok(format!(
        r#"Hetzner DNS Zone update<br>
<form class="form-horizontal group-border stripped" action="" method="post">
  <div class="form-group">
    <label class="col-lg-2 col-md-3 control-label" for="">Aktive:</label>
      <div class="col-lg-10 col-md-9">
        <div class="toggle-custom toggle-inline">
          <label class="toggle tip" data-original-title="Status" data-on="ON" data-off="OFF">
            <input type="checkbox" class="" id="checkbox-toggle"{checkbox} name="checkbox-toggle">
            <span class="button-checkbox"></span>
          </label>
        </div>
      </div>
  </div>
  <div class="form-group">
    <label class="col-lg-2 col-md-3 control-label" for="">API-Token:</label>
      <div class="col-lg-10 col-md-9">
        <input type="text" class="form-control formadd" name="apiToken" id="apiToken" maxlength="32" value="{token}">
        <span class="help-block">Enter Hetzner DNS API access token</span>
    </div>
    <label class="col-lg-2 col-md-3 control-label" for="">Directory:</label>
      <div class="col-lg-10 col-md-9">
        <input type="text" class="form-control formadd" name="directory" id="directory" maxlength="255" value="{directory}">
        <span class="help-block">The directory that should be monitored for changes (default is '/var/named').</span>
    </div>
  </div>
</form>
"#,
        checkbox = checkbox,
        token = escape_attr(&form.api_token),
        directory = escape_attr(&form.directory),
    ))
}

/// Escapes a value for use inside a double-quoted HTML attribute. The form
/// state itself keeps the exact stored bytes; only the markup is escaped.
fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
