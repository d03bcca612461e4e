//! W3C Exif data description vocabulary (`exif:`).
//!
//! Every Exif tag is a property of an `exif:IFD` (Image File Directory).
//! Tags are grouped by `rdfs:subPropertyOf` under the category properties
//! of the Exif 2.2 specification (`exif:pictTaking`, `exif:date`,
//! `exif:gpsInfo`, ...).

use crate::model::iris::*;
use crate::model::MetaDecl::{Iri, Lit};
use crate::model::{MetaDecl, TermDecl, VocabularyHeader, VocabularyModule};
use crate::registry::DuplicatePolicy;

const IFD: &str = "http://www.w3.org/2003/12/exif/ns#IFD";

/// Returns the `exif:` vocabulary module.
#[must_use]
pub fn module() -> VocabularyModule {
    VocabularyModule {
        header: VocabularyHeader {
            prefix: "exif",
            base_uri: "http://www.w3.org/2003/12/exif/ns#",
            label: "Exif data description vocabulary",
            comment: "Vocabulary to describe an Exif format picture data. All Exif 2.2 tags \
                      are defined as RDF properties, as well as several terms to help this \
                      schema.",
            strict: true,
            duplicates: DuplicatePolicy::KeepLast,
        },
        classes: CLASSES,
        properties: PROPERTIES,
        others: &[],
    }
}

const CLASSES: &[TermDecl] = &[TermDecl::class("IFD")
    .label("IFD")
    .comment("An Image File Directory")];

const ATTR: &[(&str, MetaDecl)] = &[("domain", Iri(IFD))];
const STRUCT: &[(&str, MetaDecl)] = &[
    ("subPropertyOf", Iri("http://www.w3.org/2003/12/exif/ns#imageDataStruct")),
    ("domain", Iri(IFD)),
];
const STRUCT_INT: &[(&str, MetaDecl)] = &[
    ("subPropertyOf", Iri("http://www.w3.org/2003/12/exif/ns#imageDataStruct")),
    ("domain", Iri(IFD)),
    ("range", Iri(XSD_INTEGER)),
];
const RESOLUTION: &[(&str, MetaDecl)] = &[
    ("subPropertyOf", Iri("http://www.w3.org/2003/12/exif/ns#resolution")),
    ("domain", Iri(IFD)),
];
const OFFSET: &[(&str, MetaDecl)] = &[
    ("subPropertyOf", Iri("http://www.w3.org/2003/12/exif/ns#recOffset")),
    ("domain", Iri(IFD)),
];
const CHARACTER: &[(&str, MetaDecl)] = &[
    ("subPropertyOf", Iri("http://www.w3.org/2003/12/exif/ns#imageDataCharacter")),
    ("domain", Iri(IFD)),
];
const CONFIG: &[(&str, MetaDecl)] = &[
    ("subPropertyOf", Iri("http://www.w3.org/2003/12/exif/ns#imageConfig")),
    ("domain", Iri(IFD)),
];
const CONFIG_INT: &[(&str, MetaDecl)] = &[
    ("subPropertyOf", Iri("http://www.w3.org/2003/12/exif/ns#imageConfig")),
    ("domain", Iri(IFD)),
    ("range", Iri(XSD_INTEGER)),
];
const USER: &[(&str, MetaDecl)] = &[
    ("subPropertyOf", Iri("http://www.w3.org/2003/12/exif/ns#userInfo")),
    ("domain", Iri(IFD)),
];
const RELATED: &[(&str, MetaDecl)] = &[
    ("subPropertyOf", Iri("http://www.w3.org/2003/12/exif/ns#relatedFile")),
    ("domain", Iri(IFD)),
];
const DATE: &[(&str, MetaDecl)] = &[
    ("subPropertyOf", Iri("http://www.w3.org/2003/12/exif/ns#date")),
    ("domain", Iri(IFD)),
    ("range", Iri(XSD_DATETIME)),
];
const SUBSEC: &[(&str, MetaDecl)] = &[
    ("subPropertyOf", Iri("http://www.w3.org/2003/12/exif/ns#date")),
    ("domain", Iri(IFD)),
    ("range", Iri(XSD_STRING)),
];
const PICT: &[(&str, MetaDecl)] = &[
    ("subPropertyOf", Iri("http://www.w3.org/2003/12/exif/ns#pictTaking")),
    ("domain", Iri(IFD)),
];
const PICT_INT: &[(&str, MetaDecl)] = &[
    ("subPropertyOf", Iri("http://www.w3.org/2003/12/exif/ns#pictTaking")),
    ("domain", Iri(IFD)),
    ("range", Iri(XSD_INTEGER)),
];
const GPS: &[(&str, MetaDecl)] = &[
    ("subPropertyOf", Iri("http://www.w3.org/2003/12/exif/ns#gpsInfo")),
    ("domain", Iri(IFD)),
];
const STRING: &[(&str, MetaDecl)] = &[
    ("subPropertyOf", Iri("http://www.w3.org/2003/12/exif/ns#exifAttribute")),
    ("domain", Iri(IFD)),
    ("range", Iri(XSD_STRING)),
];

const PROPERTIES: &[TermDecl] = &[
    // Category properties.
    TermDecl::property("exifAttribute")
        .label("Exif Attribute")
        .comment("A property that connects an IFD (or other resource) to one of its entries \
                  (Exif attribute). Super property which integrates all Exif tags. Domain \
                  definition was withdrawn, so that it can be used as a property of an image \
                  itself, not only an IFD.")
        .meta(&[("range", Iri(RDFS_LITERAL))]),
    TermDecl::property("exifdata")
        .label("Exif data")
        .comment("An Exif IFD data entry")
        .meta(&[("range", Iri(IFD))]),
    TermDecl::property("imageDataStruct")
        .label("Image data structure")
        .comment("An attribute relating to image data structure")
        .meta(ATTR),
    TermDecl::property("recOffset")
        .label("Recording Offset")
        .comment("An attribute relating to recording offset")
        .meta(ATTR),
    TermDecl::property("imageDataCharacter")
        .label("Image Data Characteristics")
        .comment("An attribute relating to image data characteristics")
        .meta(ATTR),
    TermDecl::property("imageConfig")
        .label("Image Config")
        .comment("An attribute relating to Image Configuration")
        .meta(ATTR),
    TermDecl::property("userInfo")
        .label("User Information")
        .comment("An attribute relating to User Information")
        .meta(ATTR),
    TermDecl::property("relatedFile")
        .label("Related File")
        .comment("Tag Relating to Related File Information")
        .meta(ATTR),
    TermDecl::property("date")
        .label("Date")
        .comment("An attribute relating to Date")
        .meta(ATTR),
    TermDecl::property("pictTaking")
        .label("Pict Taking")
        .comment("An attribute relating to Picture-Taking Conditions")
        .meta(ATTR),
    TermDecl::property("gpsInfo")
        .label("GPS Info")
        .comment("An attribute relating to GPS information")
        .meta(ATTR),
    TermDecl::property("resolution")
        .label("Resolution")
        .comment("A property that connects an IFD to one of its resolution entries")
        .meta(STRUCT),
    TermDecl::property("mm")
        .label("Length in mm")
        .comment("A length with unit of mm"),
    TermDecl::property("seconds")
        .label("Seconds")
        .comment("A length of time in seconds"),
    // Image data structure.
    TermDecl::property("imageWidth")
        .label("Image Width")
        .comment("Image width. The number of columns of image data, equal to the number of \
                  pixels per row.")
        .meta(STRUCT_INT),
    TermDecl::property("imageLength")
        .label("Image Length")
        .comment("Image height. The number of rows of image data.")
        .meta(STRUCT_INT),
    TermDecl::property("bitsPerSample")
        .label("Bits per Sample")
        .comment("The number of bits per image component. In this standard each component \
                  of the image is 8 bits, so the value for this tag is 8.")
        .meta(STRUCT_INT),
    TermDecl::property("compression")
        .label("Compression")
        .comment("The compression scheme used for the image data. When a primary image is \
                  JPEG compressed, this designation is not necessary and is omitted.")
        .meta(STRUCT_INT),
    TermDecl::property("photometricInterpretation")
        .label("Photometric Interpretation")
        .comment("The pixel composition. In JPEG compressed data a JPEG marker is used \
                  instead of this tag.")
        .meta(STRUCT_INT),
    TermDecl::property("orientation")
        .label("Orientation")
        .comment("The image orientation viewed in terms of rows and columns.")
        .meta(STRUCT_INT),
    TermDecl::property("samplesPerPixel")
        .label("Samples per Pixel")
        .comment("The number of components per pixel. Since this standard applies to RGB \
                  and YCbCr images, the value set for this tag is 3.")
        .meta(STRUCT_INT),
    TermDecl::property("planarConfiguration")
        .label("Planar Configuration")
        .comment("Indicates whether pixel components are recorded in chunky or planar \
                  format.")
        .meta(STRUCT_INT),
    TermDecl::property("yCbCrSubSampling")
        .label("YCbCr SubSampling")
        .comment("The sampling ratio of chrominance components in relation to the luminance \
                  component.")
        .meta(STRUCT_INT),
    TermDecl::property("yCbCrPositioning")
        .label("YCbCr Positioning")
        .comment("The position of chrominance components in relation to the luminance \
                  component.")
        .meta(STRUCT_INT),
    TermDecl::property("xResolution")
        .label("X Resolution")
        .comment("The number of pixels per ResolutionUnit in the ImageWidth direction.")
        .meta(RESOLUTION),
    TermDecl::property("yResolution")
        .label("Y Resolution")
        .comment("The number of pixels per ResolutionUnit in the ImageLength direction.")
        .meta(RESOLUTION),
    TermDecl::property("resolutionUnit")
        .label("Resolution Unit")
        .comment("The unit for measuring XResolution and YResolution.")
        .meta(STRUCT_INT),
    // Recording offset.
    TermDecl::property("stripOffsets")
        .label("Strip Offsets")
        .comment("For each strip, the byte offset of that strip.")
        .meta(OFFSET),
    TermDecl::property("rowsPerStrip")
        .label("Rows per Strip")
        .comment("The number of rows per strip. This is the number of rows in the image of \
                  one strip when an image is divided into strips.")
        .meta(OFFSET),
    TermDecl::property("stripByteCounts")
        .label("Strip Byte Count")
        .comment("The total number of bytes in each strip.")
        .meta(OFFSET),
    TermDecl::property("jpegInterchangeFormat")
        .label("JPEG Interchange Format")
        .comment("The offset to the start byte (SOI) of JPEG compressed thumbnail data.")
        .meta(OFFSET),
    TermDecl::property("jpegInterchangeFormatLength")
        .label("JPEG Interchange Format Length")
        .comment("The number of bytes of JPEG compressed thumbnail data.")
        .meta(OFFSET),
    // Image data characteristics.
    TermDecl::property("transferFunction")
        .label("Transfer Function")
        .comment("A transfer function for the image, described in tabular style.")
        .meta(CHARACTER),
    TermDecl::property("whitePoint")
        .label("White Point")
        .comment("The chromaticity of the white point of the image.")
        .meta(CHARACTER),
    TermDecl::property("primaryChromaticities")
        .label("Primary Chromaticities")
        .comment("The chromaticity of the three primary colors of the image.")
        .meta(CHARACTER),
    TermDecl::property("yCbCrCoefficients")
        .label("YCbCr Coefficients")
        .comment("The matrix coefficients for transformation from RGB to YCbCr image data.")
        .meta(CHARACTER),
    TermDecl::property("referenceBlackWhite")
        .label("Reference Black White")
        .comment("The reference black point value and reference white point value.")
        .meta(CHARACTER),
    TermDecl::property("colorSpace")
        .label("Color Space")
        .comment("The color space information tag (ColorSpace) is always recorded as the \
                  color space specifier.")
        .meta(CHARACTER),
    // Image configuration.
    TermDecl::property("componentsConfiguration")
        .label("Components Configuration")
        .comment("Information specific to compressed data. The channels of each component \
                  are arranged in order from the 1st component to the 4th.")
        .meta(CONFIG),
    TermDecl::property("compressedBitsPerPixel")
        .label("Compressed Bits per Pixel")
        .comment("Information specific to compressed data. The compression mode used for a \
                  compressed image is indicated in unit bits per pixel.")
        .meta(CONFIG),
    TermDecl::property("pixelXDimension")
        .label("Pixel X Dimension")
        .comment("Information specific to compressed data. When a compressed file is \
                  recorded, the valid width of the meaningful image must be recorded in \
                  this tag.")
        .meta(CONFIG_INT),
    TermDecl::property("pixelYDimension")
        .label("Pixel Y Dimension")
        .comment("Information specific to compressed data. When a compressed file is \
                  recorded, the valid height of the meaningful image must be recorded in \
                  this tag.")
        .meta(CONFIG_INT),
    // User information.
    TermDecl::property("makerNote")
        .label("Maker Note")
        .comment("Manufacturer notes")
        .meta(USER),
    TermDecl::property("userComment")
        .label("User Comment")
        .comment("Comments by user")
        .meta(USER),
    // Related files.
    TermDecl::property("relatedSoundFile")
        .label("Related Sound File")
        .comment("The name of an audio file related to the image data.")
        .meta(RELATED),
    TermDecl::property("relatedImageFileFormat")
        .label("Related Image File Format")
        .comment("Related image file format")
        .meta(RELATED),
    TermDecl::property("relatedImageWidth")
        .label("Related Image Width")
        .comment("Related image width")
        .meta(RELATED),
    TermDecl::property("relatedImageLength")
        .label("Related Image Length")
        .comment("Related image height")
        .meta(RELATED),
    // Dates.
    TermDecl::property("dateTime")
        .label("Date and Time")
        .comment("The date and time of image creation. In this standard it is the date and \
                  time the file was changed.")
        .meta(DATE),
    TermDecl::property("dateTimeOriginal")
        .label("Date and Time (Original)")
        .comment("The date and time when the original image data was generated.")
        .meta(DATE),
    TermDecl::property("dateTimeDigitized")
        .label("Date and Time (Digitized)")
        .comment("The date and time when the image was stored as digital data.")
        .meta(DATE),
    TermDecl::property("subSecTime")
        .label("DateTime subseconds")
        .comment("DateTime subseconds")
        .meta(SUBSEC),
    TermDecl::property("subSecTimeOriginal")
        .label("DateTimeOriginal subseconds")
        .comment("DateTimeOriginal subseconds")
        .meta(SUBSEC),
    TermDecl::property("subSecTimeDigitized")
        .label("DateTimeDigitized subseconds")
        .comment("DateTimeDigitized subseconds")
        .meta(SUBSEC),
    // Picture-taking conditions.
    TermDecl::property("exposureTime")
        .label("Exposure Time")
        .comment("Exposure time, given in seconds (sec).")
        .meta(PICT),
    TermDecl::property("fNumber")
        .label("F Number")
        .comment("F number")
        .meta(PICT),
    TermDecl::property("exposureProgram")
        .label("Exposure Program")
        .comment("The class of the program used by the camera to set exposure when the \
                  picture is taken.")
        .meta(PICT_INT),
    TermDecl::property("spectralSensitivity")
        .label("Spectral Sensitivity")
        .comment("Indicates the spectral sensitivity of each channel of the camera used.")
        .meta(PICT),
    TermDecl::property("isoSpeedRatings")
        .label("ISO Speed Ratings")
        .comment("Indicates the ISO Speed and ISO Latitude of the camera or input device as \
                  specified in ISO 12232.")
        .meta(PICT_INT),
    TermDecl::property("oecf")
        .label("OECF")
        .comment("Indicates the Opto-Electric Conversion Function (OECF) specified in ISO \
                  14524.")
        .meta(PICT),
    TermDecl::property("shutterSpeedValue")
        .label("Shutter Speed")
        .comment("Shutter speed. The unit is the APEX (Additive System of Photographic \
                  Exposure) setting.")
        .meta(PICT),
    TermDecl::property("apertureValue")
        .label("Aperture")
        .comment("The lens aperture. The unit is the APEX value.")
        .meta(PICT),
    TermDecl::property("brightnessValue")
        .label("Brightness")
        .comment("The value of brightness. The unit is the APEX value.")
        .meta(PICT),
    TermDecl::property("exposureBiasValue")
        .label("Exposure Bias")
        .comment("The exposure bias. The unit is the APEX value.")
        .meta(PICT),
    TermDecl::property("maxApertureValue")
        .label("Max Aperture Value")
        .comment("The smallest F number of the lens. The unit is the APEX value.")
        .meta(PICT),
    TermDecl::property("subjectDistance")
        .label("Subject Distance")
        .comment("The distance to the subject, given in meters.")
        .meta(PICT),
    TermDecl::property("meteringMode")
        .label("Metering Mode")
        .comment("Metering mode")
        .meta(PICT_INT),
    TermDecl::property("lightSource")
        .label("Light Source")
        .comment("Light source such as Daylight, Tungsten, Flash etc.")
        .meta(PICT_INT),
    TermDecl::property("flash")
        .label("Flash")
        .comment("Indicates the status of flash when the image was shot.")
        .meta(PICT_INT),
    TermDecl::property("focalLength")
        .label("Focal Length")
        .comment("Focal length of the lens")
        .meta(PICT),
    TermDecl::property("subjectArea")
        .label("Subject Area")
        .comment("The location and area of the main subject in the overall scene.")
        .meta(PICT),
    TermDecl::property("flashEnergy")
        .label("Flash Energy")
        .comment("Strobe energy at the time the image is captured, as measured in Beam \
                  Candle Power Seconds")
        .meta(PICT),
    TermDecl::property("exposureIndex")
        .label("Exposure Index")
        .comment("Exposure index selected on the camera or input device at the time the \
                  image was captured.")
        .meta(PICT),
    TermDecl::property("sensingMethod")
        .label("Sensing Method")
        .comment("The image sensor type on the camera or input device.")
        .meta(PICT_INT),
    TermDecl::property("customRendered")
        .label("Custom Rendered")
        .comment("The use of special processing on image data, such as rendering geared to \
                  output.")
        .meta(PICT_INT),
    TermDecl::property("exposureMode")
        .label("Exposure Mode")
        .comment("The exposure mode set when the image was shot.")
        .meta(PICT_INT),
    TermDecl::property("whiteBalance")
        .label("White Balance")
        .comment("The white balance mode set when the image was shot.")
        .meta(PICT_INT),
    TermDecl::property("digitalZoomRatio")
        .label("Digital Zoom Ratio")
        .comment("The digital zoom ratio when the image was shot.")
        .meta(PICT),
    TermDecl::property("focalLengthIn35mmFilm")
        .label("Focal Length In 35mm Film")
        .comment("The equivalent focal length assuming a 35mm film camera, in mm.")
        .meta(PICT_INT),
    TermDecl::property("sceneCaptureType")
        .label("Scene Capture Type")
        .comment("The type of scene that was shot.")
        .meta(PICT_INT),
    TermDecl::property("gainControl")
        .label("Gain Control")
        .comment("The degree of overall image gain adjustment.")
        .meta(PICT_INT),
    TermDecl::property("contrast")
        .label("Contrast")
        .comment("The direction of contrast processing applied by the camera when the image \
                  was shot.")
        .meta(PICT_INT),
    TermDecl::property("saturation")
        .label("Saturation")
        .comment("The direction of saturation processing applied by the camera when the \
                  image was shot.")
        .meta(PICT_INT),
    TermDecl::property("sharpness")
        .label("Sharpness")
        .comment("The direction of sharpness processing applied by the camera when the \
                  image was shot.")
        .meta(PICT_INT),
    TermDecl::property("subjectDistanceRange")
        .label("Subject Distance Range")
        .comment("Indicates the distance to the subject.")
        .meta(PICT_INT),
    // GPS.
    TermDecl::property("gpsVersionID")
        .label("GPS Version ID")
        .comment("The version of GPSInfoIFD.")
        .meta(GPS),
    TermDecl::property("gpsLatitudeRef")
        .label("North or South Latitude")
        .comment("Indicates whether the latitude is north or south latitude.")
        .meta(GPS),
    TermDecl::property("gpsLatitude")
        .label("Latitude")
        .comment("The latitude.")
        .meta(GPS),
    TermDecl::property("gpsLongitudeRef")
        .label("East or West Longitude")
        .comment("Indicates whether the longitude is east or west longitude.")
        .meta(GPS),
    TermDecl::property("gpsLongitude")
        .label("Longitude")
        .comment("The longitude.")
        .meta(GPS),
    TermDecl::property("gpsAltitudeRef")
        .label("Altitude reference")
        .comment("Indicates the altitude used as the reference altitude.")
        .meta(GPS),
    TermDecl::property("gpsAltitude")
        .label("Altitude")
        .comment("Indicates the altitude based on the reference in GPSAltitudeRef.")
        .meta(GPS),
    TermDecl::property("gpsTimeStamp")
        .label("GPS time (atomic clock)")
        .comment("The time as UTC (Coordinated Universal Time).")
        .meta(GPS),
    TermDecl::property("gpsSatellites")
        .label("GPS satellites used for measurement")
        .comment("The GPS satellites used for measurements.")
        .meta(GPS),
    TermDecl::property("gpsMapDatum")
        .label("Geodetic survey data used")
        .comment("The geodetic survey data used by the GPS receiver.")
        .meta(GPS),
    TermDecl::property("gpsDateStamp")
        .label("GPS Date")
        .comment("Date and time information relative to UTC (Coordinated Universal Time).")
        .meta(GPS),
    // Other tags.
    TermDecl::property("imageDescription")
        .label("Image Description")
        .comment("A character string giving the title of the image.")
        .meta(STRING),
    TermDecl::property("make")
        .label("Manufacturer")
        .comment("Manufacturer of image input equipment")
        .meta(STRING),
    TermDecl::property("model")
        .label("Model")
        .comment("Model of image input equipment")
        .meta(STRING),
    TermDecl::property("software")
        .label("Software")
        .comment("The name and version of the software or firmware of the camera or image \
                  input device used to generate the image.")
        .meta(STRING),
    TermDecl::property("artist")
        .label("Artist")
        .comment("Person who created the image")
        .meta(STRING),
    TermDecl::property("copyright")
        .label("Copyright")
        .comment("Copyright information. In this standard the tag is used to indicate both \
                  the photographer and editor copyrights.")
        .meta(STRING),
    TermDecl::property("exifVersion")
        .label("Exif Version")
        .comment("Exif Version")
        .meta(STRING),
    TermDecl::property("flashpixVersion")
        .label("Flashpix Version")
        .comment("The Flashpix format version supported by a FPXR file.")
        .meta(STRING),
    TermDecl::property("imageUniqueID")
        .label("Image Unique ID")
        .comment("An identifier assigned uniquely to each image")
        .meta(STRING),
    TermDecl::property("fileSource")
        .label("File Source")
        .comment("The image source")
        .meta(STRING),
    TermDecl::property("sceneType")
        .label("Scene Type")
        .comment("The type of scene")
        .meta(STRING),
    TermDecl::property("tag_number")
        .label("Tag Number")
        .comment("The Exif tag number")
        .meta(&[("range", Iri(XSD_INTEGER)), ("rdfs:isDefinedBy", Lit("Exif 2.2"))]),
    TermDecl::property("tagid")
        .label("Tag ID")
        .comment("The Exif tag number with context prefix, such as IFD0 or SubIFD")
        .meta(&[("range", Iri(XSD_STRING))]),
    TermDecl::property("width")
        .label("Width")
        .comment("Width of an object")
        .meta(&[("subPropertyOf", Iri("http://www.w3.org/2003/12/exif/ns#length"))]),
    TermDecl::property("height")
        .label("Height")
        .comment("Height of an object")
        .meta(&[("subPropertyOf", Iri("http://www.w3.org/2003/12/exif/ns#length"))]),
    TermDecl::property("length")
        .label("Length")
        .comment("Length of an object. Could be a subProperty of other general schema."),
];
