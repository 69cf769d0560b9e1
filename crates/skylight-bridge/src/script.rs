//! Generated script fragments: the per-binding promise stub and the
//! settlement evaluation.

/// Startup fragment installing the page-side stub for one bound name.
///
/// The stub allocates a page-global sequence number (starting at 1, reset by
/// navigation), parks `{resolve, reject}` under it, and forwards the call
/// envelope through the host channel. `name` is embedded verbatim.
pub(crate) fn stub_script(name: &str) -> String {
    format!(
        r#"(function() {{ var name = '{name}';
  var RPC = window._rpc = (window._rpc || {{nextSeq: 1}});
  window[name] = function() {{
    var seq = RPC.nextSeq++;
    var promise = new Promise(function(resolve, reject) {{
      RPC[seq] = {{
        resolve: resolve,
        reject: reject,
      }};
    }});
    window.external.invoke(JSON.stringify({{
      id: seq,
      method: name,
      params: Array.prototype.slice.call(arguments),
    }}));
    return promise;
  }};
}})();"#
    )
}

/// Script settling the pending call `seq` and clearing its slot.
///
/// Both `seq` and the payload are inlined verbatim; the payload must already
/// be valid JSON text.
pub(crate) fn settle_script(seq: &str, outcome: Result<&str, &str>) -> String {
    let (verb, payload) = match outcome {
        Ok(result) => ("resolve", result),
        Err(error) => ("reject", error),
    };
    format!("window._rpc[{seq}].{verb}({payload}); window._rpc[{seq}] = undefined;")
}
