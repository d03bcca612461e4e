//! HTTP Vocabulary in RDF 1.0, a W3C Working Group Note (`http:`).
//!
//! Describes HTTP requests, responses, headers and status codes as RDF.

use crate::model::iris::*;
use crate::model::MetaDecl::Iri;
use crate::model::{TermDecl, VocabularyHeader, VocabularyModule};
use crate::registry::DuplicatePolicy;

/// Returns the `http:` vocabulary module.
#[must_use]
pub fn module() -> VocabularyModule {
    VocabularyModule {
        header: VocabularyHeader {
            prefix: "http",
            base_uri: "http://www.w3.org/2011/http#",
            label: "HTTP Vocabulary",
            comment: "A namespace for describing HTTP messages \
                      (http://www.w3.org/Protocols/rfc2616/rfc2616.html)",
            strict: true,
            duplicates: DuplicatePolicy::KeepLast,
        },
        classes: CLASSES,
        properties: PROPERTIES,
        others: &[],
    }
}

const CLASSES: &[TermDecl] = &[
    TermDecl::class("Connection")
        .label("Connection")
        .comment("A connection used for HTTP transfer."),
    TermDecl::class("EntityHeader")
        .label("Entity Header")
        .comment("An entity header in an HTTP message.")
        .meta(&[("subClassOf", Iri("http://www.w3.org/2011/http#MessageHeader"))]),
    TermDecl::class("GeneralHeader")
        .label("General Header")
        .comment("A general header in an HTTP message.")
        .meta(&[("subClassOf", Iri("http://www.w3.org/2011/http#MessageHeader"))]),
    TermDecl::class("HeaderElement")
        .label("Header Element")
        .comment("A part of a deconstructed header value."),
    TermDecl::class("HeaderName")
        .label("Header Name")
        .comment("A header name."),
    TermDecl::class("Message")
        .label("Message")
        .comment("An HTTP message."),
    TermDecl::class("MessageHeader")
        .label("Message Header")
        .comment("A header in an HTTP message."),
    TermDecl::class("Method")
        .label("Method")
        .comment("The HTTP method used for a request."),
    TermDecl::class("Parameter")
        .label("Parameter")
        .comment("A parameter for a part of a header value."),
    TermDecl::class("Request")
        .label("Request")
        .comment("An HTTP request.")
        .meta(&[("subClassOf", Iri("http://www.w3.org/2011/http#Message"))]),
    TermDecl::class("RequestHeader")
        .label("Request Header")
        .comment("A header in an HTTP request message.")
        .meta(&[("subClassOf", Iri("http://www.w3.org/2011/http#MessageHeader"))]),
    TermDecl::class("Response")
        .label("Response")
        .comment("An HTTP response.")
        .meta(&[("subClassOf", Iri("http://www.w3.org/2011/http#Message"))]),
    TermDecl::class("ResponseHeader")
        .label("Response Header")
        .comment("A header in an HTTP response message.")
        .meta(&[("subClassOf", Iri("http://www.w3.org/2011/http#MessageHeader"))]),
    TermDecl::class("StatusCode")
        .label("Status code")
        .comment("The status code of an HTTP response."),
];

const PROPERTIES: &[TermDecl] = &[
    TermDecl::property("absolutePath")
        .label("Absolute path")
        .comment("An absolute path used as request URI.")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("absoluteURI")
        .label("Absolute URI")
        .comment("An absolute URI used as request URI.")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("authority")
        .label("Authority")
        .comment("An authority used as request URI.")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("body")
        .label("Entity Body")
        .comment("The entity body of an HTTP message.")
        .meta(&[("domain", Iri("http://www.w3.org/2011/http#Message"))]),
    TermDecl::property("connectionAuthority")
        .label("Connection authority")
        .comment("The authority of a connection used for the HTTP transfer.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2011/http#Connection")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("elementName")
        .label("Header element name")
        .comment("The name of a header element.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2011/http#HeaderElement")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("elementValue")
        .label("Header element value")
        .comment("The value of a header element.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2011/http#HeaderElement")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("fieldName")
        .label("Field name")
        .comment("The name of an HTTP header field.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2011/http#MessageHeader")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("fieldValue")
        .label("Field value")
        .comment("The value of an HTTP header field.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2011/http#MessageHeader")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("headerElements")
        .label("Header elements")
        .comment("The deconstructed parts of an HTTP header value.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2011/http#MessageHeader")),
            ("range", Iri(RDF_LIST)),
        ]),
    TermDecl::property("hdrName")
        .label("Header name")
        .comment("The name of an HTTP header.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2011/http#MessageHeader")),
            ("range", Iri("http://www.w3.org/2011/http#HeaderName")),
        ]),
    TermDecl::property("headers")
        .label("Headers")
        .comment("The headers in an HTTP message.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2011/http#Message")),
            ("range", Iri(RDF_LIST)),
        ]),
    TermDecl::property("httpVersion")
        .label("HTTP version")
        .comment("The HTTP version of an HTTP message.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2011/http#Message")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("methodName")
        .label("Method name")
        .comment("The HTTP method name used for the HTTP request.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2011/http#Request")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("mthd")
        .label("Method")
        .comment("The HTTP method used for the HTTP request.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2011/http#Request")),
            ("range", Iri("http://www.w3.org/2011/http#Method")),
        ]),
    TermDecl::property("paramName")
        .label("Parameter name")
        .comment("The name of a parameter in a part of a deconstructed HTTP header value.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2011/http#Parameter")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("paramValue")
        .label("Parameter value")
        .comment("The value of a parameter in a part of a deconstructed HTTP header value.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2011/http#Parameter")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("params")
        .label("Header parameters")
        .comment("The parameters in a part of a deconstructed HTTP header value.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2011/http#HeaderElement")),
            ("range", Iri(RDF_LIST)),
        ]),
    TermDecl::property("reasonPhrase")
        .label("Reason phrase")
        .comment("The reason phrase (status text) of an HTTP response.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2011/http#Response")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("requestURI")
        .label("Request URI")
        .comment("The request URI of an HTTP request.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2011/http#Request")),
            ("range", Iri(XSD_STRING)),
        ]),
    TermDecl::property("requests")
        .label("Requests")
        .comment("The HTTP requests sent over a connection.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2011/http#Connection")),
            ("range", Iri(RDF_LIST)),
        ]),
    TermDecl::property("resp")
        .label("Response")
        .comment("The HTTP response sent in answer to an HTTP request.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2011/http#Request")),
            ("range", Iri("http://www.w3.org/2011/http#Response")),
        ]),
    TermDecl::property("sc")
        .label("Status code")
        .comment("The status code of an HTTP response.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2011/http#Response")),
            ("range", Iri("http://www.w3.org/2011/http#StatusCode")),
        ]),
    TermDecl::property("statusCodeValue")
        .label("Status code value")
        .comment("The status code value of an HTTP response.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2011/http#Response")),
            ("range", Iri(XSD_INT)),
        ]),
    TermDecl::property("statusCodeNumber")
        .label("Status code number")
        .comment("The status code number.")
        .meta(&[
            ("domain", Iri("http://www.w3.org/2011/http#StatusCode")),
            ("range", Iri(XSD_INT)),
        ]),
];
